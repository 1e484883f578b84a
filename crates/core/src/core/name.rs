/// Dotted-name decomposition
///
/// `SettingsForm.admin.example.tsx` splits into:
///
/// | part      | plain mode         | kinds mode  |
/// |-----------|--------------------|-------------|
/// | stem      | `SettingsForm`     | `SettingsForm` |
/// | kind      | -                  | `example`   |
/// | middle    | `admin`, `example` | `admin`     |
/// | extension | `tsx`              | `tsx`       |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePartition<'a> {
    pub stem: &'a str,
    pub kind: Option<&'a str>,
    pub middle: Vec<&'a str>,
    pub extension: Option<&'a str>,
}

impl<'a> NamePartition<'a> {
    /// Split `name` on `.`
    ///
    /// A single-part name has no extension and no middle parts. With `kinds`
    /// enabled the middle part nearest the extension becomes the kind.
    pub fn parse(name: &'a str, kinds: bool) -> Self {
        let mut parts = name.split('.');
        // split always yields at least one item
        let stem = parts.next().unwrap_or_default();
        let mut middle: Vec<&str> = parts.collect();
        let extension = middle.pop();
        let kind = if kinds { middle.pop() } else { None };

        Self {
            stem,
            kind,
            middle,
            extension,
        }
    }

    /// Middle part at `index`, `None` past the end
    pub fn middle_part(&self, index: usize) -> Option<&'a str> {
        self.middle.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_part() {
        let partition = NamePartition::parse("README", false);
        assert_eq!(partition.stem, "README");
        assert_eq!(partition.extension, None);
        assert!(partition.middle.is_empty());
        assert_eq!(partition.kind, None);
    }

    #[test]
    fn test_empty_name() {
        let partition = NamePartition::parse("", true);
        assert_eq!(partition.stem, "");
        assert_eq!(partition.extension, None);
    }

    #[test]
    fn test_dotfile() {
        let partition = NamePartition::parse(".gitignore", false);
        assert_eq!(partition.stem, "");
        assert_eq!(partition.extension, Some("gitignore"));
    }

    #[test]
    fn test_kinds_mode() {
        let plain = NamePartition::parse("SettingsForm.admin.example.tsx", false);
        assert_eq!(plain.middle, vec!["admin", "example"]);
        assert_eq!(plain.kind, None);

        let kinds = NamePartition::parse("SettingsForm.admin.example.tsx", true);
        assert_eq!(kinds.stem, "SettingsForm");
        assert_eq!(kinds.kind, Some("example"));
        assert_eq!(kinds.middle, vec!["admin"]);
        assert_eq!(kinds.extension, Some("tsx"));
        assert_eq!(kinds.middle_part(1), None);
    }

    #[test]
    fn test_kinds_mode_without_middle() {
        let partition = NamePartition::parse("name.ext", true);
        assert_eq!(partition.kind, None);
        assert_eq!(partition.extension, Some("ext"));
    }
}
