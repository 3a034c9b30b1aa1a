use phonepe_statement_rs::{ParserBuilder, StatementSummary};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        &args[1]
    } else {
        println!("Using example statement text from demos/phonepe_statement.txt\n");
        "demos/phonepe_statement.txt"
    };

    let report = ParserBuilder::new().filename(file_path).report()?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    let summary = StatementSummary::from_transactions(&report.expenses)?;
    println!();
    println!("Transactions: {}", summary.count);
    println!("Total debit:  ₹{}", summary.total_debit);
    println!("Total credit: ₹{}", summary.total_credit);
    println!("Net:          ₹{}", summary.net);

    Ok(())
}
