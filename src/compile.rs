use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Lines of compiler output kept when reporting a failed run.
const OUTPUT_TAIL_LINES: usize = 20;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited with {status} while compiling {}\n{output}", .source_file.display())]
    Failed {
        program: String,
        source_file: PathBuf,
        status: ExitStatus,
        output: String,
    },
}

/// Files produced by a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    pub pdf: PathBuf,
    pub log: PathBuf,
}

impl CompiledArtifact {
    /// Outputs a LaTeX compiler writes next to `source`.
    pub fn beside(source: &Path) -> Self {
        Self {
            pdf: source.with_extension("pdf"),
            log: source.with_extension("log"),
        }
    }
}

/// Turns a LaTeX source file into a viewable document.
pub trait Compiler {
    fn name(&self) -> &str;
    fn compile(&self, source: &Path) -> Result<CompiledArtifact, CompileError>;
}

/// Runs an external `pdflatex` compatible program.
#[derive(Debug, Clone)]
pub struct PdfLatex {
    program: String,
}

impl PdfLatex {
    pub fn new() -> Self {
        Self::with_program("pdflatex")
    }

    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PdfLatex {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler for PdfLatex {
    fn name(&self) -> &str {
        &self.program
    }

    fn compile(&self, source: &Path) -> Result<CompiledArtifact, CompileError> {
        // Run inside the source directory so the .pdf and .log land beside the .tex.
        let dir = source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = source.file_name().unwrap_or(source.as_os_str());

        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg(file_name)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CompileError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CompileError::Failed {
                program: self.program.clone(),
                source_file: source.to_path_buf(),
                status: output.status,
                output: tail(&String::from_utf8_lossy(&output.stdout), OUTPUT_TAIL_LINES),
            });
        }
        Ok(CompiledArtifact::beside(source))
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}
