use keycalc_rs::command::Command;
use keycalc_rs::evaluate_batch;
use keycalc_rs::keys::parse_keys;

fn main() {
    pretty_env_logger::init();

    let queues: Vec<Vec<Command>> = ["1+2", "6×7", "100%", "9−", "1.5÷3"]
        .iter()
        .map(|keys| parse_keys(keys).expect("demo keys are valid"))
        .collect();

    for (i, result) in evaluate_batch(&queues).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
