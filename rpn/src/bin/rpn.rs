use rpn::RpnEvaluator;

fn evalexpr(input: &str) {
    match RpnEvaluator::eval_str(input) {
        Err(e) => println!("Eval error: {:?}", e),
        Ok(result) => println!("{}", result),
    }
}

fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        evalexpr(&input[..]);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                evalexpr(&line[..]);
            }
        }
    }
}
