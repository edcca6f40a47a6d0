use keycalc_rs::evaluate_keys;
use keycalc_rs::session::Calculator;
use log::debug;

fn main() {
    pretty_env_logger::init();

    for keys in ["2+3×4", "10−3+2", "50%+1", "3.14", "5÷0", "5+"] {
        match evaluate_keys(keys) {
            Ok(result) => println!("{keys} = {result}"),
            Err(err) => println!("{keys}: {err}"),
        }
    }

    let mut calculator = Calculator::new();
    for keys in ["12+7=", "*3=", "~", "AC", "9÷", "="] {
        calculator.press_keys(keys).expect("demo keys are valid");
        debug!("queue: {:?}", calculator.commands());
        println!("{:>8} -> {:>10}   history {:?}", keys, calculator.display(), calculator.history());
    }
}
