use jobboard_core::JobId;

/// `key=value` pair from the command line; keys are lowercased.
pub(crate) type Field = (String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    List,
    Refresh,
    Filter(Vec<Field>),
    Reset,
    Page(u32),
    Next,
    Prev,
    Size(u32),
    Add(Vec<Field>),
    Edit(JobId),
    Save(Vec<Field>),
    Cancel,
    /// Only produced after the user confirmed.
    Delete(JobId),
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
Commands:
  list                         show the current page
  refresh                      reload the current page
  filter key=value ...         q, type, location, tag, sort (quote values with spaces)
  reset                        clear all filters
  page N | next | prev         move between pages
  size N                       page size: 10, 20, 30 or 50
  add key=value ...            title, company, location, date, type, tags, url
  edit ID                      load a job into the form
  save key=value ...           save changes to the job being edited
  cancel                       leave edit mode
  delete ID                    delete a job (asks for confirmation)
  help | quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let tokens = tokenize(line)?;
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "list" | "ls" => no_args(head, Command::List, rest)?,
        "refresh" => no_args(head, Command::Refresh, rest)?,
        "filter" => Command::Filter(parse_fields(rest)?),
        "reset" => no_args(head, Command::Reset, rest)?,
        "page" => Command::Page(single_number(head, rest)?),
        "next" => no_args(head, Command::Next, rest)?,
        "prev" => no_args(head, Command::Prev, rest)?,
        "size" => Command::Size(single_number(head, rest)?),
        "add" => Command::Add(parse_fields(rest)?),
        "edit" => Command::Edit(single_number(head, rest)?),
        "save" => Command::Save(parse_fields(rest)?),
        "cancel" => no_args(head, Command::Cancel, rest)?,
        "delete" | "rm" => Command::Delete(single_number(head, rest)?),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
    };
    Ok(Some(command))
}

/// `y` or `yes`, any case.
pub(crate) fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn no_args(name: &str, command: Command, rest: &[String]) -> Result<Command, String> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(format!("'{name}' takes no arguments"))
    }
}

fn single_number<T: std::str::FromStr>(name: &str, rest: &[String]) -> Result<T, String> {
    match rest {
        [value] => value
            .parse()
            .map_err(|_| format!("'{name}' expects a number, got '{value}'")),
        _ => Err(format!("'{name}' expects exactly one number")),
    }
}

fn parse_fields(tokens: &[String]) -> Result<Vec<Field>, String> {
    tokens
        .iter()
        .map(|token| match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                Ok((key.to_ascii_lowercase(), value.to_string()))
            }
            _ => Err(format!("Expected key=value, got '{token}'")),
        })
        .collect()
}

/// Splits on whitespace; double quotes group text and are removed.
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err("Unterminated quote".to_string());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(key: &str, value: &str) -> Field {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn quoted_values_keep_spaces() {
        assert_eq!(
            parse_command(r#"add title="Pricing Actuary" company=Aviva tags="Life, Pricing""#),
            Ok(Some(Command::Add(vec![
                field("title", "Pricing Actuary"),
                field("company", "Aviva"),
                field("tags", "Life, Pricing"),
            ])))
        );
    }

    #[test]
    fn empty_quoted_value_is_kept() {
        assert_eq!(
            parse_command(r#"filter tag="""#),
            Ok(Some(Command::Filter(vec![field("tag", "")])))
        );
    }

    #[test]
    fn numeric_commands() {
        assert_eq!(parse_command("page 3"), Ok(Some(Command::Page(3))));
        assert_eq!(parse_command("SIZE 20"), Ok(Some(Command::Size(20))));
        assert_eq!(parse_command("delete 7"), Ok(Some(Command::Delete(7))));
        assert!(parse_command("page").is_err());
        assert!(parse_command("edit seven").is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("filter location").is_err());
        assert!(parse_command(r#"add title="open"#).is_err());
        assert!(parse_command("next 2").is_err());
    }

    #[test]
    fn confirmation_answers() {
        assert!(is_confirmation("y"));
        assert!(is_confirmation(" YES "));
        assert!(!is_confirmation(""));
        assert!(!is_confirmation("no"));
    }
}
