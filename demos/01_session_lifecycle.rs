/// session lifecycle - edit, submit with errors, fix, submit, reset
use chrono::{TimeZone, Utc};
use mortgage_calculator_rs::{
    CalculatorConfig, Field, FieldEdit, MortgageType, RepaymentSession, SafeTimeProvider,
    SubmitOutcome, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));

    let mut session = RepaymentSession::start(CalculatorConfig::default(), &time)?;

    // incomplete form
    session.edit(FieldEdit::Amount("300000".to_string()), &time);
    session.edit(FieldEdit::Term("abc".to_string()), &time);

    if let SubmitOutcome::Rejected(errors) = session.submit(&time)? {
        println!("rejected:");
        for field in errors.failed_fields() {
            println!("  {}: {}", field, errors.message(field).unwrap_or_default());
        }
    }

    // fix the remaining fields
    session.edit(FieldEdit::Term("30".to_string()), &time);
    session.edit(FieldEdit::Rate("4.5".to_string()), &time);
    session.edit(FieldEdit::select(MortgageType::Repayment), &time);
    println!("term error after edit: {:?}", session.errors().message(Field::Term));

    if let SubmitOutcome::Calculated(result) = session.submit(&time)? {
        println!("monthly: {}", result.monthly_display());
        println!("total:   {}", result.total_display());
    }

    session.reset(&time);
    println!("phase after reset: {:?}", session.phase());

    println!("\nevents:");
    for event in session.events.events() {
        println!("  {:?}", event);
    }

    Ok(())
}
