use hornet_core::{Answer, Binding, Environment, TermKind};

/// How answers are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `true` / `false`, or one `X = value` line per binding
    #[default]
    Text,
    /// A JSON boolean, or an array of solutions
    Json,
}

/// Render the answer to a query, newline-terminated.
///
/// In text mode each solution is followed by an empty line, and a query with
/// variables but no solutions prints `false`.
pub fn answer(env: &Environment, answer: &Answer, format: OutputFormat) -> serde_json::Result<String> {
    match (answer, format) {
        (Answer::Truth(truth), OutputFormat::Text) => Ok(format!("{truth}\n")),
        (Answer::Solutions(solutions), OutputFormat::Text) if solutions.is_empty() => {
            Ok("false\n".to_string())
        }
        (Answer::Solutions(solutions), OutputFormat::Text) => {
            let mut out = String::new();
            for solution in solutions {
                for binding in env.bindings(solution) {
                    out.push_str(&format!("{} = {}\n", binding.variable, binding.value));
                }
                out.push('\n');
            }
            Ok(out)
        }
        (Answer::Truth(truth), OutputFormat::Json) => Ok(format!("{}\n", serde_json::to_string(truth)?)),
        (Answer::Solutions(solutions), OutputFormat::Json) => {
            let named: Vec<Vec<Binding>> = solutions.iter().map(|s| env.bindings(s)).collect();
            Ok(format!("{}\n", serde_json::to_string(&named)?))
        }
    }
}

/// Stored facts, one per line, in insertion order
pub fn facts(env: &Environment) -> String {
    env.knowledge()
        .facts()
        .iter()
        .map(|fact| format!("{}\n", env.pretty(fact)))
        .collect()
}

/// Stored rules, one per line, in insertion order
pub fn rules(env: &Environment) -> String {
    env.knowledge()
        .rules()
        .iter()
        .map(|rule| format!("{}\n", env.pretty(rule)))
        .collect()
}

/// Registered names grouped by kind, each group closed by an empty line
pub fn terms(env: &Environment) -> String {
    let mut out = String::new();
    for kind in TermKind::ALL {
        out.push_str(&format!("{kind}:\n"));
        for name in env.symbols().names(kind) {
            out.push_str(name);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
