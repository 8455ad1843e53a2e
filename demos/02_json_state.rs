/// json state - serialization for debugging and monitoring
use mortgage_calculator_rs::{
    CalculatorConfig, FieldEdit, MortgageType, RepaymentSession, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json session state ===\n");

    let time = SafeTimeProvider::new(TimeSource::System);
    let config = CalculatorConfig::from_json(
        r#"{"decimal_places": 2, "rounding": "HalfEven", "zero_rate_policy": "Linear"}"#,
    )?;
    let mut session = RepaymentSession::start(config, &time)?;

    println!("stage 1: empty form");
    println!("--------------------");
    println!("{}\n", session.json()?);

    session.submit(&time)?;
    println!("stage 2: submitted empty");
    println!("------------------------");
    println!("{}\n", session.json()?);

    session.edit(FieldEdit::Amount("180000".to_string()), &time);
    session.edit(FieldEdit::Term("20".to_string()), &time);
    session.edit(FieldEdit::Rate("3.9".to_string()), &time);
    session.edit(FieldEdit::select(MortgageType::InterestOnly), &time);
    session.submit(&time)?;
    println!("stage 3: interest-only result");
    println!("-----------------------------");
    println!("{}\n", session.json()?);

    println!("snapshots recorded: {}", session.snapshots.len());

    Ok(())
}
