//! @acp:module "Generate Command"
//! @acp:summary "Generate ideas and print them"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use anyhow::Result;

use crate::generator::IdeaGenerator;
use crate::render::{render_entry, render_json, OutputFormat};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// How many ideas to show
    pub count: usize,
    /// Stack category to restrict ideas to
    pub focus: Option<String>,
    /// Seed to replay the same random stream
    pub seed: Option<u64>,
    /// Append the action plan
    pub detail: bool,
    pub format: OutputFormat,
}

/// Execute the generate command against stdout
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit_ideas(&options, &mut out)
}

/// Write and flush the ideas. A reader closing the pipe early ends the run normally.
pub fn emit_ideas<W: Write>(options: &GenerateOptions, out: &mut W) -> Result<()> {
    let result = write_ideas(options, out).and_then(|_| out.flush().map_err(Into::into));
    match result {
        Err(e) if is_broken_pipe(&e) => {
            tracing::debug!("Output closed early: {}", e);
            Ok(())
        }
        other => other,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::BrokenPipe)
}

/// Generate `count` ideas from one generator and write them to `out`
pub fn write_ideas<W: Write>(options: &GenerateOptions, out: &mut W) -> Result<()> {
    let mut generator = IdeaGenerator::new(options.seed);
    let focus = options.focus.as_deref();
    tracing::debug!(
        "Generating {} idea(s), focus={:?}, seed={:?}",
        options.count,
        focus,
        options.seed
    );

    match options.format {
        OutputFormat::Text => {
            for index in 1..=options.count {
                let idea = generator.generate(focus)?;
                writeln!(out, "{}", render_entry(index, &idea, options.detail))?;
                writeln!(out)?;
            }
        }
        OutputFormat::Json => {
            let ideas = (0..options.count)
                .map(|_| generator.generate(focus))
                .collect::<crate::Result<Vec<_>>>()?;
            writeln!(out, "{}", render_json(&ideas, options.detail)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(format: OutputFormat) -> GenerateOptions {
        GenerateOptions {
            count: 3,
            focus: None,
            seed: Some(42),
            detail: false,
            format,
        }
    }

    fn run(options: &GenerateOptions) -> String {
        let mut buf = Vec::new();
        write_ideas(options, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output_numbers_entries() {
        let output = run(&options(OutputFormat::Text));
        assert!(output.starts_with("Idea 1\n------\nName: "));
        assert!(output.contains("\n\nIdea 2\n------\n"));
        assert!(output.contains("\n\nIdea 3\n------\n"));
        assert!(!output.contains("Idea 4"));
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_seeded_output_repeats() {
        let opts = options(OutputFormat::Text);
        assert_eq!(run(&opts), run(&opts));
    }

    #[test]
    fn test_detail_adds_action_plan() {
        let mut opts = options(OutputFormat::Text);
        opts.detail = true;
        assert_eq!(run(&opts).matches("Action plan:").count(), 3);
    }

    #[test]
    fn test_zero_count_prints_nothing() {
        let mut opts = options(OutputFormat::Text);
        opts.count = 0;
        assert_eq!(run(&opts), "");
    }

    /// Writer whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    /// Writer failing with something other than a closed pipe
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_pipe_ends_quietly() {
        let mut opts = options(OutputFormat::Text);
        opts.count = 1000;
        assert!(emit_ideas(&opts, &mut ClosedPipe).is_ok());
        assert!(emit_ideas(&options(OutputFormat::Json), &mut ClosedPipe).is_ok());
    }

    #[test]
    fn test_other_write_errors_propagate() {
        let err = emit_ideas(&options(OutputFormat::Text), &mut FullDisk).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_json_output_parses() {
        let output = run(&options(OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }
}
