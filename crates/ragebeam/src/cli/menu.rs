use std::io::{BufRead, Write};

use ragebeam_fetch::Link;

use crate::error::CliError;

pub const PROMPT: &str = "Input number of versions you would like to download: ";

/// Numbered file names, one per line, followed by the prompt.
pub fn render(links: &[Link]) -> String {
    let lines: Vec<String> = links
        .iter()
        .enumerate()
        .map(|(i, link)| format!("{i}. {}", link.file_name()))
        .collect();
    format!("{}\n{PROMPT}", lines.join("\n"))
}

pub fn select<'a>(links: &'a [Link], input: &str) -> Result<&'a Link, CliError> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| CliError::NotANumber(input.to_string()))?;
    links.get(index).ok_or(CliError::OutOfRange {
        index,
        len: links.len(),
    })
}

/// Show the menu on `out` and read one line from `input`.
pub fn prompt<'a, R: BufRead, W: Write>(
    links: &'a [Link],
    mut input: R,
    mut out: W,
) -> Result<&'a Link, CliError> {
    out.write_all(render(links).as_bytes())
        .and_then(|_| out.flush())
        .map_err(CliError::Input)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(CliError::Input)?;
    select(links, &line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn links() -> Vec<Link> {
        vec![
            Link::new("https://dl.example.com/releases/8.2/linux/splunk-8.2.tgz"),
            Link::new("https://dl.example.com/releases/9.1/linux/splunk-9.1.tgz"),
        ]
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(&links()),
            "0. splunk-8.2.tgz\n1. splunk-9.1.tgz\n\
             Input number of versions you would like to download: "
        );
    }

    #[test]
    fn test_select() {
        let links = links();
        assert_eq!(select(&links, "1\n").unwrap(), &links[1]);
        assert_eq!(select(&links, " 0 ").unwrap(), &links[0]);
    }

    #[test]
    fn test_select_rejects_bad_input() {
        let links = links();
        assert!(matches!(
            select(&links, "2"),
            Err(CliError::OutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(select(&links, "-1"), Err(CliError::NotANumber(_))));
        assert!(matches!(select(&links, "first"), Err(CliError::NotANumber(_))));
        assert!(matches!(select(&links, ""), Err(CliError::NotANumber(_))));
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let links = links();
        let mut out = Vec::new();
        let chosen = prompt(&links, Cursor::new("1\n0\n"), &mut out).unwrap();

        assert_eq!(chosen.file_name(), "splunk-9.1.tgz");
        assert!(String::from_utf8(out).unwrap().ends_with(PROMPT));
    }
}
