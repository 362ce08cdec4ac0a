use emi::{Calculator, LoanKind, LogRenderer, TenureUnit};
use log::{error, info};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let mut renderer = LogRenderer;
    let mut calculator = Calculator::default();

    for (kind, principal, rate, years) in [
        (LoanKind::Home, 5_000_000., 8.5, 20.),
        (LoanKind::Car, 800_000., 9.25, 5.),
        (LoanKind::Personal, 300_000., 12.5, 3.),
        (LoanKind::Business, 2_500_000., 11., 7.),
    ] {
        calculator.select_kind(kind);
        calculator.set_principal(principal);
        calculator.set_annual_rate(rate);
        calculator.set_tenure(years);

        info!("{}", calculator.title());
        if let Err(e) = calculator.refresh(&mut renderer) {
            error!("{}", e);
        }
    }

    // the business loan again, with the tenure slider in months
    calculator.set_tenure_unit(TenureUnit::Months);
    info!("{} ({})", calculator.title(), TenureUnit::Months);
    if let Err(e) = calculator.refresh(&mut renderer) {
        error!("{}", e);
    }
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<emi::LoanInput>();
    is_normal::<emi::LoanResult>();
    is_normal::<Calculator>();
}
