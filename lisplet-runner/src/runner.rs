use lisplet_interpreter::RunError;

pub fn execute(source: &str) -> Result<(), RunError> {
    let value = lisplet_interpreter::run(source)?;
    println!("{}", value);
    Ok(())
}
