use super::filesystem::RootEntry;

const MAX_ROOT_PYTHON_FILES: usize = 5;
const MAX_ROOT_FILES: usize = 15;
const SOURCE_DIRS: [&str; 2] = ["src", "lib"];
const DOC_EXTENSIONS: [&str; 3] = ["md", "rst", "txt"];
const CODE_EXTENSIONS: [&str; 1] = ["py"];
const CONFIG_EXTENSIONS: [&str; 6] = ["json", "yaml", "yml", "toml", "cfg", "ini"];

pub fn folder_issues(entries: &[RootEntry]) -> Vec<String> {
    let files = entries
        .iter()
        .filter(|entry| !entry.is_dir)
        .collect::<Vec<_>>();
    let has_extension = |set: &[&str]| {
        files
            .iter()
            .any(|file| file.extension().is_some_and(|ext| set.contains(&ext.as_str())))
    };

    let mut issues = Vec::new();

    let root_python = files
        .iter()
        .filter(|file| file.extension().as_deref() == Some("py"))
        .count();
    if root_python > MAX_ROOT_PYTHON_FILES {
        issues.push(format!(
            "Many Python files in root ({root_python}); consider creating a src/ folder"
        ));
    }

    let has_source_dir = entries
        .iter()
        .any(|entry| entry.is_dir && SOURCE_DIRS.contains(&entry.name.as_str()));
    if !has_source_dir {
        issues.push("Missing src/ or lib/ folder; consider organizing source code".to_string());
    }

    if files.len() > MAX_ROOT_FILES {
        issues.push(format!(
            "Root folder holds {} files; consider grouping them into folders",
            files.len()
        ));
    }

    if has_extension(&DOC_EXTENSIONS)
        && has_extension(&CODE_EXTENSIONS)
        && has_extension(&CONFIG_EXTENSIONS)
    {
        issues.push(
            "Root folder mixes docs, code and configs; consider separating them".to_string(),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> RootEntry {
        RootEntry {
            name: name.to_string(),
            is_dir: false,
        }
    }

    fn dir(name: &str) -> RootEntry {
        RootEntry {
            name: name.to_string(),
            is_dir: true,
        }
    }

    #[test]
    fn conventional_layout_has_no_issues() {
        let entries = vec![file("README.md"), file("pyproject.toml"), dir("src"), dir("tests")];
        assert!(folder_issues(&entries).is_empty());
    }

    #[test]
    fn missing_source_folder_is_reported() {
        let issues = folder_issues(&[file("README.md"), dir("docs")]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("Missing src/ or lib/ folder"));
    }

    #[test]
    fn file_named_src_does_not_count_as_folder() {
        let issues = folder_issues(&[file("src"), dir("lib")]);
        assert!(issues.is_empty());
        let issues = folder_issues(&[file("src")]);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn crowded_python_root_reports_every_matching_issue() {
        let mut entries = (0..16)
            .map(|index| file(&format!("module_{index}.py")))
            .collect::<Vec<_>>();
        entries.push(file("README.md"));
        entries.push(file("settings.json"));

        let issues = folder_issues(&entries);
        assert_eq!(issues.len(), 4);
        assert!(issues[0].contains("Many Python files in root (16)"));
        assert!(issues[1].starts_with("Missing src/ or lib/"));
        assert!(issues[2].contains("18 files"));
        assert!(issues[3].contains("mixes docs, code and configs"));
    }
}
