use keycalc_rs::ast::Parser;
use keycalc_rs::keys::parse_keys;

fn main() {
    pretty_env_logger::init();

    let commands = parse_keys("2−3×4+1").expect("Failed to parse keys");
    let Some(ast) = Parser::parse_commands(&commands) else {
        println!("No leading operand");
        return;
    };

    println!("Tree: {}", ast);
    match ast.evaluate() {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
