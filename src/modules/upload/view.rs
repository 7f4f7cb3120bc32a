/// What the upload card shows for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadView {
    DropZone,
    Preview(PreviewCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    pub file_name: String,
    pub size_label: String,
    pub preview_uri: String,
    pub submit: SubmitButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl UploadView {
    pub fn render(&self) -> String {
        let mut out = String::from("== Upload Visiting Card ==\n");
        match self {
            UploadView::DropZone => {
                out.push_str("Drop your visiting card here\n");
                out.push_str("or use `open <path>` to browse files\n");
            }
            UploadView::Preview(card) => {
                out.push_str(&format!("Preview: {}\n", card.preview_uri));
                out.push_str(&format!("{}\n{}\n", card.file_name, card.size_label));
                let state = if card.submit.enabled { "" } else { " (disabled)" };
                out.push_str(&format!("[{}]{}  [Clear]\n", card.submit.label, state));
            }
        }
        out
    }
}
