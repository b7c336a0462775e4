use std::fmt::Write as _;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use arabin_core::engine::ExplainResult;
use arabin_core::settings::settings;
use arabin_core::unicode::strip_tashkil;
use arabin_core::{TransliterateError, Transliterator};

use super::CliError;

fn render(text: &str, bare: bool) -> Result<String, TransliterateError> {
    let out = Transliterator::global().transliterate(text)?;
    Ok(if bare { strip_tashkil(&out) } else { out })
}

/// Convert each line of `reader`. Blank lines stay blank instead of failing.
pub fn convert_lines<R: BufRead, W: Write>(reader: R, mut writer: W, bare: bool) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        match render(&line, bare) {
            Ok(out) => writeln!(writer, "{out}")?,
            Err(TransliterateError::EmptyInput) => writeln!(writer)?,
        }
    }
    writer.flush()
}

pub fn convert_cmd(words: &[String], file: Option<&str>, bare: bool) {
    let text = match file {
        Some(path) => die!(
            fs::read_to_string(path).map_err(|source| CliError::Io {
                path: Path::new(path).to_path_buf(),
                source,
            }),
            "Error reading input: {}"
        ),
        None if words.is_empty() => {
            let stdin = io::stdin();
            die!(
                convert_lines(stdin.lock(), io::stdout().lock(), bare),
                "Error: {}"
            );
            return;
        }
        None => words.join(" "),
    };

    match render(&text, bare) {
        Ok(out) => println!("{out}"),
        Err(TransliterateError::EmptyInput) => {
            eprintln!("{}", settings().messages.empty_input);
            std::process::exit(1);
        }
    }
}

/// Human-readable segment table.
pub fn format_explain(result: &ExplainResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "input:  {}", result.input);
    let _ = writeln!(out, "output: {}", result.output);
    for seg in &result.segments {
        let tier = seg.tier.map(|t| t.name()).unwrap_or("(pass)");
        let _ = writeln!(
            out,
            "  {:>3}..{:<3} {:<10} {:<12} {}",
            seg.start,
            seg.end,
            format!("{:?}", seg.source),
            tier,
            seg.output
        );
    }
    if !result.unmatched_latin.is_empty() {
        let letters: String = result.unmatched_latin.iter().collect();
        let _ = writeln!(out, "unmatched latin: {letters}");
    }
    out
}

pub fn explain_cmd(text: &str, json: bool) {
    let result = match Transliterator::global().explain(text) {
        Ok(r) => r,
        Err(TransliterateError::EmptyInput) => {
            eprintln!("{}", settings().messages.empty_input);
            std::process::exit(1);
        }
    };
    if json {
        let s = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{s}");
    } else {
        print!("{}", format_explain(&result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_lines_keeps_blank_lines() {
        let input = "ba\n\n  ka  \n";
        let mut out = Vec::new();
        convert_lines(input.as_bytes(), &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Transliterator::global().transliterate("ba").unwrap());
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], Transliterator::global().transliterate("ka").unwrap());
    }

    #[test]
    fn convert_lines_bare_strips_marks() {
        let mut out = Vec::new();
        convert_lines("bbaa".as_bytes(), &mut out, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\u{0628}\u{0627}\n");
    }

    #[test]
    fn explain_text_lists_segments() {
        let result = Transliterator::global().explain("--kitab x").unwrap();
        let text = format_explain(&result);
        assert!(text.contains("\"--\""));
        assert!(text.contains("punctuation"));
        assert!(text.contains("(pass)"));
        assert!(text.contains("unmatched latin: x"));
    }

    #[test]
    fn explain_json_shape() {
        let result = Transliterator::global().explain("ba 2").unwrap();
        let v: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(v["input"], "ba 2");
        assert_eq!(v["segments"][0]["tier"], "consonant");
        assert_eq!(v["segments"][1]["tier"], serde_json::Value::Null);
        assert_eq!(v["segments"][2]["source"], "2");
        assert_eq!(v["unmatched_latin"].as_array().unwrap().len(), 0);
    }
}
