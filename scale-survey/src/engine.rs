use serde::Serialize;

use crate::{
    Answers, Diagnostics, PageInfo, QuestionDescriptor, QuestionId, QuestionRegistry,
    SurveyDeclaration, SurveyError, SurveyHost, SurveyView, TracingDiagnostics, Warning,
};

/// Where the survey currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// Advancing through fixed-size pages in declaration order.
    Linear { page: usize },

    /// Following a conditional jump, showing a single targeted question
    /// outside the normal page sequence.
    Branched { question: QuestionId },
}

/// Payload delivered to the host when the survey is dismissed.
///
/// The field names are part of the host contract: existing integrations
/// read `answers` and `completed` off this payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseNotice {
    /// Snapshot of everything answered so far.
    pub answers: Answers,

    /// Whether the user reached the end of the survey before dismissal.
    pub completed: bool,
}

/// Single authority over survey navigation.
///
/// Owns the answer map and the current position, resolves conditional
/// branching against linear pagination on every [`advance`](Self::advance),
/// and reports the render state the UI draws from. All operations are
/// synchronous and none of them fail: defective input degrades to a logged
/// warning and a safe fallback.
pub struct SurveyEngine {
    registry: QuestionRegistry,
    answers: Answers,
    position: Position,
    completed: bool,
    questions_per_page: usize,
    diagnostics: Box<dyn Diagnostics>,
}

impl SurveyEngine {
    /// Build an engine from a declaration, reporting recovered anomalies
    /// through `tracing`.
    pub fn new(declaration: &SurveyDeclaration) -> Self {
        Self::with_diagnostics(declaration, Box::new(TracingDiagnostics))
    }

    /// Build an engine with an injected [`Diagnostics`] hook.
    pub fn with_diagnostics(
        declaration: &SurveyDeclaration,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        let registry = QuestionRegistry::build(&declaration.questions, diagnostics.as_ref());
        let questions_per_page = if declaration.questions_per_page == 0 {
            diagnostics.warning(Warning::InvalidQuestionsPerPage { keeping: 1 });
            1
        } else {
            declaration.questions_per_page
        };

        Self {
            registry,
            answers: Answers::new(),
            position: Position::Linear { page: 0 },
            completed: false,
            questions_per_page,
            diagnostics,
        }
    }

    /// Get the question registry.
    pub fn registry(&self) -> &QuestionRegistry {
        &self.registry
    }

    /// Get the answers recorded so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Check whether the survey has reached its terminal state.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Get the pagination width.
    pub fn questions_per_page(&self) -> usize {
        self.questions_per_page
    }

    /// Store the selection for a question.
    ///
    /// Selections for questions that are not currently visible are stored
    /// as well. The UI is expected to only forward events for rendered
    /// questions, but receiving one is not an error.
    pub fn record_answer(&mut self, id: impl Into<QuestionId>, value: i64) {
        self.answers.record(id, value);
    }

    /// Check whether the "next" control should be enabled.
    ///
    /// True when every visible required question has an answer. Once the
    /// survey is completed the control turns into a close action and stays
    /// enabled. Note this only drives the control state; [`advance`](Self::advance)
    /// itself is never blocked.
    pub fn can_advance(&self) -> bool {
        if self.completed {
            return true;
        }
        self.visible_questions()
            .iter()
            .filter(|question| question.required())
            .all(|question| question.id().is_some_and(|id| self.answers.contains(id)))
    }

    /// The questions the UI should render right now, in declaration order.
    ///
    /// Empty once the survey is completed (the terminal thanks-state
    /// supersedes any page), a single question while branched, and a page
    /// slice otherwise. An out-of-range page clamps to an empty display.
    pub fn visible_questions(&self) -> Vec<&QuestionDescriptor> {
        if self.completed {
            return Vec::new();
        }

        match &self.position {
            Position::Branched { question } => match self.registry.get(question) {
                Some(descriptor) => vec![descriptor],
                None => {
                    self.diagnostics.warning(Warning::UnknownActiveQuestion {
                        question: question.clone(),
                    });
                    Vec::new()
                }
            },
            Position::Linear { page } => {
                let count = self.registry.count();
                let start = page * self.questions_per_page;
                if start >= count && count > 0 {
                    self.diagnostics.warning(Warning::PageOutOfRange {
                        page: *page,
                        pages: self.page_count(),
                    });
                    return Vec::new();
                }
                let end = (start + self.questions_per_page).min(count);
                self.registry.all()[start..end].iter().collect()
            }
        }
    }

    /// Ids of the visible questions. Questions declared without an id are
    /// rendered but omitted here.
    pub fn visible_question_ids(&self) -> Vec<QuestionId> {
        self.visible_questions()
            .iter()
            .filter_map(|question| question.id().cloned())
            .collect()
    }

    /// Resolve one "next" action.
    ///
    /// Branch rules take precedence over pagination: the first visible
    /// question with a recorded answer and a matching rule determines the
    /// jump target. Without a valid jump the survey moves to the next page,
    /// and past the last page into the completed state. Once completed, a
    /// further call performs the close transition and yields the payload.
    pub fn advance(&mut self) -> Option<CloseNotice> {
        if self.completed {
            return Some(self.close());
        }

        if let Some(target) = self.branch_target() {
            self.position = Position::Branched { question: target };
            return None;
        }

        let page = self.current_page() + 1;
        if page < self.page_count() {
            self.position = Position::Linear { page };
        } else {
            self.completed = true;
        }
        None
    }

    /// Produce the dismissal payload: a snapshot of the answers plus the
    /// completion flag. The engine does not dedupe repeated closes; the UI
    /// disables its control after removal.
    pub fn close(&self) -> CloseNotice {
        CloseNotice {
            answers: self.answers.clone(),
            completed: self.completed,
        }
    }

    /// Close the survey and deliver the payload through a host callback.
    pub fn close_with<H: SurveyHost>(&self, host: &mut H) -> Result<CloseNotice, SurveyError> {
        let notice = self.close();
        host.closed(&notice).map_err(SurveyError::host)?;
        Ok(notice)
    }

    /// Fraction of the survey completed so far, in `[0, 1]`.
    ///
    /// Linear progress counts finished pages, so page 0 reports 0.0 until
    /// it has been advanced past. While branched, progress is the active
    /// question's position within the full sequence.
    pub fn progress_fraction(&self) -> f64 {
        if self.completed {
            return 1.0;
        }

        let fraction = match &self.position {
            Position::Branched { question } => match self.registry.index_of(question) {
                Some(index) => index as f64 / self.registry.count() as f64,
                None => 0.0,
            },
            Position::Linear { page } => {
                let pages = self.page_count();
                if pages == 0 {
                    0.0
                } else {
                    *page as f64 / pages as f64
                }
            }
        };
        fraction.clamp(0.0, 1.0)
    }

    /// Number of pages in linear mode.
    pub fn page_count(&self) -> usize {
        self.registry.count().div_ceil(self.questions_per_page)
    }

    /// Pagination indicator data (1-based), for "page X of Y" displays.
    /// `None` while branched or after completion.
    pub fn page_info(&self) -> Option<PageInfo> {
        if self.completed {
            return None;
        }
        match &self.position {
            Position::Linear { page } => Some(PageInfo {
                current: page + 1,
                total: self.page_count(),
            }),
            Position::Branched { .. } => None,
        }
    }

    /// Snapshot the full render state in one call.
    pub fn view(&self) -> SurveyView {
        SurveyView {
            visible: self.visible_question_ids(),
            can_advance: self.can_advance(),
            progress: self.progress_fraction(),
            completed: self.completed,
            page: self.page_info(),
        }
    }

    /// Change the pagination width. Zero is rejected with a warning and the
    /// current width kept. The current position is left untouched.
    pub fn set_questions_per_page(&mut self, questions_per_page: usize) {
        if questions_per_page == 0 {
            self.diagnostics.warning(Warning::InvalidQuestionsPerPage {
                keeping: self.questions_per_page,
            });
            return;
        }
        self.questions_per_page = questions_per_page;
    }

    /// Replace the question set wholesale and reset all navigation state:
    /// answers are cleared, the position returns to the first page, and the
    /// completion flag is lowered.
    pub fn reconfigure(&mut self, declaration: &SurveyDeclaration) {
        self.registry = QuestionRegistry::build(&declaration.questions, self.diagnostics.as_ref());
        self.answers = Answers::new();
        self.position = Position::Linear { page: 0 };
        self.completed = false;
        self.set_questions_per_page(declaration.questions_per_page);
    }

    /// Find the first valid branch target among the visible questions.
    ///
    /// Questions are scanned in display order; each answered one resolves
    /// its rules in declaration order. A target pointing at an unknown
    /// question discards that candidate (with a warning) and the scan
    /// continues.
    fn branch_target(&self) -> Option<QuestionId> {
        for question in self.visible_questions() {
            let Some(id) = question.id() else { continue };
            let Some(value) = self.answers.get(id) else {
                continue;
            };
            let Some(target) = question.branch_target(value) else {
                continue;
            };

            if self.registry.contains(target) {
                return Some(target.clone());
            }
            self.diagnostics.warning(Warning::UnknownBranchTarget {
                question: id.clone(),
                target: target.clone(),
            });
        }
        None
    }

    /// The page the current position belongs to, for linear advancement.
    ///
    /// While branched this is recovered from the active question's index.
    /// If that question cannot be located the engine falls back to page 0.
    fn current_page(&self) -> usize {
        match &self.position {
            Position::Linear { page } => *page,
            Position::Branched { question } => match self.registry.index_of(question) {
                Some(index) => index / self.questions_per_page,
                None => {
                    self.diagnostics.warning(Warning::UnknownActiveQuestion {
                        question: question.clone(),
                    });
                    0
                }
            },
        }
    }
}
