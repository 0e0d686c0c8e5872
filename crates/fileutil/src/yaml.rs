//! File name handling for YAML configuration files.

/// Extensions recognized as YAML.
pub const YAML_EXTENSIONS: [&str; 2] = [".yaml", ".yml"];

/// Extension given to names that have none, and that `.yml` is rewritten to.
pub const DEFAULT_YAML_EXTENSION: &str = ".yaml";

/// Returns true if `name` ends in `.yaml` or `.yml`. Case sensitive.
pub fn is_yaml_file(name: &str) -> bool {
    YAML_EXTENSIONS.contains(&extension(name))
}

/// Normalizes a config file name to the `.yaml` extension.
///
/// ```text
/// config       -> config.yaml
/// config.yml   -> config.yaml
/// config.yaml  -> config.yaml
/// config.json  -> config.json
/// ""           -> ""
/// ```
///
/// Applying it more than once has no further effect.
pub fn ensure_yaml_extension(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    match extension(name) {
        "" => format!("{name}{DEFAULT_YAML_EXTENSION}"),
        ".yml" => {
            let stem = &name[..name.len() - ".yml".len()];
            format!("{stem}{DEFAULT_YAML_EXTENSION}")
        }
        _ => name.to_string(),
    }
}

/// The suffix of `name` starting at the last `.` of its final path component, or
/// empty if that component has no `.`.
fn extension(name: &str) -> &str {
    for (i, c) in name.char_indices().rev() {
        match c {
            '.' => return &name[i..],
            c if std::path::is_separator(c) => break,
            _ => {}
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_files() {
        assert!(is_yaml_file("config.yaml"));
        assert!(is_yaml_file("config.yml"));
        assert!(is_yaml_file("dags/nightly.build.yaml"));
        assert!(is_yaml_file(".yml"));
    }

    #[test]
    fn not_yaml_files() {
        assert!(!is_yaml_file("config.json"));
        assert!(!is_yaml_file("config"));
        assert!(!is_yaml_file(""));
        assert!(!is_yaml_file("config.YAML"));
        assert!(!is_yaml_file("config.yaml.bak"));
        assert!(!is_yaml_file("conf.yaml/config"));
    }

    #[test]
    fn ensure_extension() {
        let cases = [
            ("config", "config.yaml"),
            ("config.yml", "config.yaml"),
            ("config.yaml", "config.yaml"),
            ("config.json", "config.json"),
            ("", ""),
            ("dags/nightly", "dags/nightly.yaml"),
            ("dags.d/nightly", "dags.d/nightly.yaml"),
            ("dags.d/nightly.yml", "dags.d/nightly.yaml"),
        ];

        for (name, want) in cases {
            assert_eq!(ensure_yaml_extension(name), want, "input: {name:?}");
        }
    }

    #[test]
    fn ensure_extension_is_idempotent() {
        let names = [
            "", "config", "config.yml", "config.yaml", "config.json", "a.", ".yml", "x.yml.yml",
            "dir.d/", "dags/b",
        ];

        for name in names {
            let once = ensure_yaml_extension(name);
            assert_eq!(ensure_yaml_extension(&once), once, "input: {name:?}");
        }
    }

    #[test]
    fn extension_of_final_component() {
        assert_eq!(extension("a/b.c/d"), "");
        assert_eq!(extension("a/b.c/d.e"), ".e");
        assert_eq!(extension("file."), ".");
        assert_eq!(extension(""), "");
    }
}
