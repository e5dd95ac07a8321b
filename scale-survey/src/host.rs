use crate::CloseNotice;

/// Host-side integration seam for the survey lifecycle.
///
/// The embedding layer decides what dismissing the widget means (removing
/// a DOM node, hiding a view, logging the payload). The engine only hands
/// over the [`CloseNotice`]; everything after that is host-specific.
pub trait SurveyHost {
    /// The error type for this host.
    type Error: Into<anyhow::Error>;

    /// Called with the dismissal payload when the survey is closed.
    fn closed(&mut self, notice: &CloseNotice) -> Result<(), Self::Error>;
}
