/// quick start - validate a form and calculate repayments
use mortgage_calculator_rs::{MortgageForm, MortgageInput, MortgageType, RepaymentCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = RepaymentCalculator::default();

    for kind in [MortgageType::Repayment, MortgageType::InterestOnly] {
        let form = MortgageForm::new("200000", "25", "5", kind);

        match MortgageInput::parse(&form) {
            Ok(input) => {
                let result = calculator.calculate(&input)?;
                println!("{}:", kind);
                println!("  monthly repayments: {}", result.monthly_display());
                println!("  total over the term: {}", result.total_display());
            }
            Err(errors) => {
                for error in errors.errors() {
                    println!("  {}", error);
                }
            }
        }
    }

    Ok(())
}
