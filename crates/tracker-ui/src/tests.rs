#[cfg(test)]
mod tests {
    use crate::panels::modal::ModalAction;
    use crate::theme::*;
    use tracker_types::export::{Dataset, ExportFormat};

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_query_button_labels() {
        assert!(query_button_label(true).contains("Processing..."));
        assert!(query_button_label(true).contains("fa-spin"));
        assert!(query_button_label(false).contains("Ask"));
    }

    #[test]
    fn test_display_values() {
        assert_eq!(overlay_display(true), "flex");
        assert_eq!(overlay_display(false), "none");
        assert_eq!(section_display(true), "block");
        assert_eq!(section_display(false), "none");
    }

    // ─── ModalAction Tests ───────────────────────────────────

    #[test]
    fn test_modal_action_from_attributes() {
        assert_eq!(
            ModalAction::from_attributes(Some("summary"), Some("csv")),
            Some(ModalAction::Export(Dataset::Summary, ExportFormat::Csv))
        );
    }

    #[test]
    fn test_modal_action_rejects_unknown() {
        assert!(ModalAction::from_attributes(Some("payroll"), Some("csv")).is_none());
        assert!(ModalAction::from_attributes(Some("employees"), Some("xml")).is_none());
        assert!(ModalAction::from_attributes(None, Some("json")).is_none());
        assert!(ModalAction::from_attributes(Some("employees"), None).is_none());
    }
}
