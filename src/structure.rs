use indexmap::IndexMap;

/// Subfolder name mapped to the file names created directly inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderSpec(pub IndexMap<String, Vec<String>>);

/// Top-level folder name mapped to its [`FolderSpec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureSpec(pub IndexMap<String, FolderSpec>);
impl StructureSpec {
    /// Builds a structure from a literal table of `(folder, [(subfolder, [files])])`.
    pub fn from_entries(entries: &[(&str, &[(&str, &[&str])])]) -> Self {
        let folders = entries
            .iter()
            .map(|(folder, subfolders)| {
                let content = subfolders
                    .iter()
                    .map(|(subfolder, files)| {
                        let files = files.iter().map(|file| file.to_string()).collect();
                        (subfolder.to_string(), files)
                    })
                    .collect();

                (folder.to_string(), FolderSpec(content))
            })
            .collect();

        Self(folders)
    }

    pub fn folders(&self) -> impl Iterator<Item = (&String, &FolderSpec)> {
        self.0.iter()
    }

    /// Number of files a run produces: every listed file plus one entry point per top-level folder.
    pub fn file_count(&self) -> usize {
        self.0
            .values()
            .map(|folder| folder.0.values().map(Vec::len).sum::<usize>() + 1)
            .sum()
    }
}

lazy_static::lazy_static! {
    /// Layout of the bot project skeleton.
    pub static ref BOT_STRUCTURE: StructureSpec = StructureSpec::from_entries(&[(
        "bot",
        &[
            (
                "handlers",
                &["messageHandler.js", "buttonHandler.js", "formHandler.js"],
            ),
            (
                "services",
                &[
                    "orderService.js",
                    "driverService.js",
                    "queueService.js",
                    "notificationService.js",
                ],
            ),
            ("models", &["Order.js", "Driver.js", "Queue.js"]),
            ("utils", &["validator.js", "formatter.js"]),
        ],
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_structure_has_single_top_level_folder() {
        let folders: Vec<&String> = BOT_STRUCTURE.0.keys().collect();

        assert_eq!(folders, vec!["bot"]);
    }

    #[test]
    fn test_bot_structure_subfolders_keep_source_order() {
        let bot = &BOT_STRUCTURE.0["bot"];
        let subfolders: Vec<&str> = bot.0.keys().map(String::as_str).collect();

        assert_eq!(subfolders, vec!["handlers", "services", "models", "utils"]);
        assert_eq!(
            bot.0["services"],
            vec![
                "orderService.js",
                "driverService.js",
                "queueService.js",
                "notificationService.js"
            ]
        );
    }

    #[test]
    fn test_file_count_includes_entry_point() {
        assert_eq!(BOT_STRUCTURE.file_count(), 13);
    }

    #[test]
    fn test_file_count_of_empty_folder_is_entry_point_only() {
        let spec = StructureSpec::from_entries(&[("web", &[])]);

        assert_eq!(spec.file_count(), 1);
    }
}
