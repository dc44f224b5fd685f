//! Shell completion scripts for the clikit binary.

use crate::cli::build_cli;
use crate::error::{ClikitError, Result};
use clap_complete::{generate, Shell};

/// Shells completion scripts can be generated for.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Parse a shell name or path such as `zsh` or `/usr/bin/fish`.
    pub fn from_name(name: &str) -> Result<ShellType> {
        let shell_name = std::path::Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name);

        match shell_name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(ClikitError::ShellCompletion(format!(
                "Unsupported shell: '{}'",
                shell_name
            ))),
        }
    }

    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Generate the completion script for `shell`.
pub fn generate_completion_script(shell: ShellType) -> String {
    let mut cmd = build_cli();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), &mut cmd, "clikit", &mut buf);
    String::from_utf8(buf).unwrap_or_default()
}

/// Print the completion script for `shell` to stdout.
pub fn print_completion_script(shell: ShellType) {
    print!("{}", generate_completion_script(shell));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ShellType::from_name("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_name("/bin/zsh").unwrap(), ShellType::Zsh);
        assert_eq!(
            ShellType::from_name("/usr/local/bin/fish").unwrap(),
            ShellType::Fish
        );
    }

    #[test]
    fn test_from_name_unsupported() {
        let err = ShellType::from_name("/bin/tcsh").unwrap_err();
        assert!(err.to_string().contains("tcsh"));
    }

    #[test]
    fn test_supported_shells_parse() {
        for name in SUPPORTED_SHELLS {
            assert_eq!(ShellType::from_name(name).unwrap().name(), *name);
        }
    }

    #[test]
    fn test_scripts_mention_subcommands() {
        for shell in [ShellType::Bash, ShellType::Zsh, ShellType::Fish] {
            let script = generate_completion_script(shell);
            assert!(script.contains("clikit"), "{shell}");
            assert!(script.contains("convert"), "{shell}");
        }
    }
}
