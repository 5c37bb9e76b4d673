//! Form State
//!
//! Drafts of the three text inputs plus which field has focus. The scanned
//! file list takes part in the focus cycle so it can be navigated by keys.

/// Focusable fields, in Tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    RepoUrl,
    Folder,
    ChangedFile,
    FileList,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::RepoUrl,
        FormField::Folder,
        FormField::ChangedFile,
        FormField::FileList,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_text_input(self) -> bool {
        !matches!(self, FormField::FileList)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::RepoUrl => "Repository URL",
            FormField::Folder => "Folder Name",
            FormField::ChangedFile => "Changed File",
            FormField::FileList => "Files",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::RepoUrl => "https://github.com/user/repo.git",
            FormField::Folder => "MyRepoFolder",
            FormField::ChangedFile => "lib/utils.js",
            FormField::FileList => "",
        }
    }
}

/// Input form state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub repo_url: String,
    pub folder: String,
    pub changed_file: String,
    pub focus: FormField,
}

impl FormState {
    /// Current text of a field (empty for the file list)
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::RepoUrl => &self.repo_url,
            FormField::Folder => &self.folder,
            FormField::ChangedFile => &self.changed_file,
            FormField::FileList => "",
        }
    }

    /// Mutable text of the focused field, if it is a text input
    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::RepoUrl => Some(&mut self.repo_url),
            FormField::Folder => Some(&mut self.folder),
            FormField::ChangedFile => Some(&mut self.changed_file),
            FormField::FileList => None,
        }
    }

    /// Folder draft with surrounding whitespace removed
    pub fn folder_name(&self) -> &str {
        self.folder.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_wraps() {
        assert_eq!(FormField::RepoUrl.next(), FormField::Folder);
        assert_eq!(FormField::FileList.next(), FormField::RepoUrl);
        assert_eq!(FormField::RepoUrl.previous(), FormField::FileList);
    }

    #[test]
    fn test_file_list_is_not_editable() {
        let mut form = FormState {
            focus: FormField::FileList,
            ..Default::default()
        };
        assert!(form.focused_value_mut().is_none());
        assert!(!FormField::FileList.is_text_input());
    }
}
