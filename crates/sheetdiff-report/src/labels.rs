//! Fixed wording used by the Markdown report

/// Every heading, marker and link text the Markdown renderer emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    /// Document title
    pub title: String,
    /// Prefix of the provenance line naming the old workbook
    pub source: String,
    /// Prefix of the provenance line naming the new workbook
    pub target: String,
    pub added_sheets: String,
    pub removed_sheets: String,
    /// Prefix of each compared sheet's heading
    pub sheet: String,
    /// Line emitted for a compared sheet without changes
    pub no_changes: String,
    pub cell_column: String,
    pub old_column: String,
    pub new_column: String,
    /// Heading of the old value inside an overflow block
    pub old_value: String,
    /// Heading of the new value inside an overflow block
    pub new_value: String,
    /// Link text pointing at an old value block
    pub old_link: String,
    /// Link text pointing at a new value block
    pub new_link: String,
}

impl ReportLabels {
    pub fn english() -> Self {
        Self {
            title: "Workbook diff report".into(),
            source: "Source".into(),
            target: "Target".into(),
            added_sheets: "Added sheets".into(),
            removed_sheets: "Removed sheets".into(),
            sheet: "Sheet".into(),
            no_changes: "No changes".into(),
            cell_column: "Cell".into(),
            old_column: "Old value".into(),
            new_column: "New value".into(),
            old_value: "Old value".into(),
            new_value: "New value".into(),
            old_link: "see old value".into(),
            new_link: "see new value".into(),
        }
    }

    pub fn japanese() -> Self {
        Self {
            title: "Excel差分レポート".into(),
            source: "比較元".into(),
            target: "比較先".into(),
            added_sheets: "追加されたシート".into(),
            removed_sheets: "削除されたシート".into(),
            sheet: "シート".into(),
            no_changes: "変更なし".into(),
            cell_column: "セル".into(),
            old_column: "旧値".into(),
            new_column: "新値".into(),
            old_value: "旧値".into(),
            new_value: "新値".into(),
            old_link: "旧値はこちら".into(),
            new_link: "新値はこちら".into(),
        }
    }

    /// Look up a preset by language code (`en`, `ja`)
    pub fn for_language(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::english()),
            "ja" | "japanese" => Some(Self::japanese()),
            _ => None,
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::english()
    }
}

/// Options for the Markdown renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub labels: ReportLabels,
}

impl ReportOptions {
    pub fn with_labels(mut self, labels: ReportLabels) -> Self {
        self.labels = labels;
        self
    }
}
