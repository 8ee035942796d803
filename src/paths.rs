//! Settles on the input and output files for a run, asking the user when needed.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::error::{Result, SpherePadError};

/// Source of answers to interactive questions. `None` means no answer can be had.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Asks on stderr and reads answers from stdin.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", question)?;
        stderr.flush()?;

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer)? == 0 {
            return Ok(None);
        }

        Ok(Some(answer.trim().to_string()))
    }
}

/// Never answers; used with `--no-input`.
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn ask(&mut self, _question: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathOptions {
    /// Replace an existing output without asking.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IoPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Resolves an existing input file, reprompting until one is given.
pub fn resolve_input(input: Option<PathBuf>, prompt: &mut dyn Prompt) -> Result<PathBuf> {
    let mut candidate = input;

    loop {
        match candidate {
            Some(path) if path.is_file() => return Ok(path),
            Some(path) => {
                warn!(path = %path.display(), "Input file not found");
                candidate = ask_path(prompt, "Enter input filename: ")?
                    .map(Some)
                    .ok_or(SpherePadError::MissingFile(path))?;
            }
            None => {
                candidate = Some(
                    ask_path(prompt, "Enter input filename: ")?
                        .ok_or_else(|| SpherePadError::MissingFile(PathBuf::new()))?,
                );
            }
        }
    }
}

/// Resolves a writable output path, confirming before an existing file is replaced.
pub fn resolve_output(
    output: Option<PathBuf>,
    options: PathOptions,
    prompt: &mut dyn Prompt,
) -> Result<PathBuf> {
    let mut path = match output {
        Some(path) => path,
        None => ask_path(prompt, "Enter output filename: ")?
            .ok_or_else(|| SpherePadError::FileConflict(PathBuf::new()))?,
    };

    while path.exists() && !options.force {
        if confirm_overwrite(prompt, &path)? {
            break;
        }
        path = ask_path(prompt, "Enter filename: ")?.ok_or(SpherePadError::FileConflict(path))?;
    }

    Ok(path)
}

pub fn resolve_io(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    options: PathOptions,
    prompt: &mut dyn Prompt,
) -> Result<IoPaths> {
    let input = resolve_input(input, prompt)?;
    let output = resolve_output(output, options, prompt)?;

    Ok(IoPaths { input, output })
}

fn confirm_overwrite(prompt: &mut dyn Prompt, path: &Path) -> Result<bool> {
    let question = format!(
        "Output file {} already exists. Overwrite: [(y)es/(n)o] ? ",
        path.display()
    );
    let answer = prompt
        .ask(&question)?
        .ok_or_else(|| SpherePadError::FileConflict(path.to_path_buf()))?;

    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

fn ask_path(prompt: &mut dyn Prompt, question: &str) -> Result<Option<PathBuf>> {
    loop {
        match prompt.ask(question)? {
            None => return Ok(None),
            Some(answer) if answer.is_empty() => continue,
            Some(answer) => return Ok(Some(PathBuf::from(answer))),
        }
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, fs};

    use tempfile::TempDir;

    use super::*;

    /// Replays canned answers.
    struct ScriptedPrompt {
        answers: VecDeque<String>,
    }

    impl ScriptedPrompt {
        fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            ScriptedPrompt {
                answers: answers.into_iter().map(Into::into).collect(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, _question: &str) -> Result<Option<String>> {
            Ok(self.answers.pop_front())
        }
    }

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "x").unwrap();
        path
    }

    #[test]
    fn should_accept_existing_input() {
        let dir = TempDir::new().unwrap();
        let input = touch(&dir, "points.csv");

        let resolved = resolve_input(Some(input.clone()), &mut NoPrompt).unwrap();
        assert_eq!(resolved, input);
    }

    #[test]
    fn should_reprompt_until_input_exists() {
        let dir = TempDir::new().unwrap();
        let input = touch(&dir, "points.csv");
        let missing = dir.path().join("nope.csv");

        let mut prompt = ScriptedPrompt::new([
            missing.to_string_lossy().to_string(),
            String::new(),
            input.to_string_lossy().to_string(),
        ]);
        let resolved = resolve_input(None, &mut prompt).unwrap();
        assert_eq!(resolved, input);
    }

    #[test]
    fn should_fail_missing_input_without_prompt() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");

        let err = resolve_input(Some(missing.clone()), &mut NoPrompt).unwrap_err();
        match err {
            SpherePadError::MissingFile(path) => assert_eq!(path, missing),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn should_keep_new_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("padded.csv");

        let resolved =
            resolve_output(Some(output.clone()), PathOptions::default(), &mut NoPrompt).unwrap();
        assert_eq!(resolved, output);
    }

    #[test]
    fn should_overwrite_when_confirmed() {
        let dir = TempDir::new().unwrap();
        let output = touch(&dir, "padded.csv");

        let mut prompt = ScriptedPrompt::new(["Yes"]);
        let resolved =
            resolve_output(Some(output.clone()), PathOptions::default(), &mut prompt).unwrap();
        assert_eq!(resolved, output);
    }

    #[test]
    fn should_ask_for_new_name_when_declined() {
        let dir = TempDir::new().unwrap();
        let output = touch(&dir, "padded.csv");
        let taken = touch(&dir, "taken.csv");
        let fresh = dir.path().join("fresh.csv");

        let mut prompt = ScriptedPrompt::new([
            "n".to_string(),
            taken.to_string_lossy().to_string(),
            "no".to_string(),
            fresh.to_string_lossy().to_string(),
        ]);
        let resolved = resolve_output(Some(output), PathOptions::default(), &mut prompt).unwrap();
        assert_eq!(resolved, fresh);
    }

    #[test]
    fn should_refuse_existing_output_without_prompt() {
        let dir = TempDir::new().unwrap();
        let output = touch(&dir, "padded.csv");

        let err = resolve_output(Some(output), PathOptions::default(), &mut NoPrompt).unwrap_err();
        assert!(matches!(err, SpherePadError::FileConflict(_)));
    }

    #[test]
    fn should_overwrite_when_forced() {
        let dir = TempDir::new().unwrap();
        let output = touch(&dir, "padded.csv");

        let forced = PathOptions { force: true };
        let resolved = resolve_output(Some(output.clone()), forced, &mut NoPrompt).unwrap();
        assert_eq!(resolved, output);
    }

    #[test]
    fn should_resolve_both_paths() {
        let dir = TempDir::new().unwrap();
        let input = touch(&dir, "grid.grd");
        let output = dir.path().join("patched.grd");

        let mut prompt = ScriptedPrompt::new([
            input.to_string_lossy().to_string(),
            output.to_string_lossy().to_string(),
        ]);
        let paths = resolve_io(None, None, PathOptions::default(), &mut prompt).unwrap();
        assert_eq!(paths, IoPaths { input, output });
    }
}
