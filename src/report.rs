//! Text report for a monthly payroll.
//!
//! This is where errors stop propagating: [`generate_report`] always returns
//! displayable text, either the report or a single error line.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculation::{calculate_payroll, round_half_up, round_half_up_to};
use crate::config::CalendarConfig;
use crate::error::EngineResult;
use crate::models::{PayrollCalculation, RawInput, WorkerType};

/// Decimal places shown for the per-minute rate.
const PER_MINUTE_DECIMAL_PLACES: u32 = 4;

/// Runs the payroll pipeline and renders the report with the default calendar.
///
/// `days_per_month` overrides the 30-day month used to derive a salaried
/// worker's hourly rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{PayrollField, RawInput};
/// use payroll_engine::report::generate_report;
///
/// let input = RawInput::new().with(PayrollField::BaseSalary, "3000");
/// let report = generate_report(&input, "mensalista", None);
///
/// assert!(report.contains("✅ Salário Líquido: R$ 2692.06"));
///
/// let error = generate_report(&input, "estagiario", None);
/// assert!(error.starts_with("❌ Erro: "));
/// ```
pub fn generate_report(input: &RawInput, worker_type: &str, days_per_month: Option<u32>) -> String {
    let calendar = CalendarConfig::default().with_days_per_month(days_per_month);
    generate_report_with_calendar(input, worker_type, &calendar)
}

/// Runs the payroll pipeline and renders the report with an explicit calendar.
pub fn generate_report_with_calendar(
    input: &RawInput,
    worker_type: &str,
    calendar: &CalendarConfig,
) -> String {
    match run_pipeline(input, worker_type, calendar) {
        Ok(calculation) => render_report(&calculation),
        Err(error) => {
            warn!(worker_type, error = %error, "Payroll report rejected");
            format!("❌ Erro: {}", error)
        }
    }
}

fn run_pipeline(
    input: &RawInput,
    worker_type: &str,
    calendar: &CalendarConfig,
) -> EngineResult<PayrollCalculation> {
    // The classification is checked before any field is read.
    let worker_type: WorkerType = worker_type.parse()?;
    calculate_payroll(input, worker_type, calendar)
}

/// Renders a completed calculation in the fixed eleven-line layout.
pub fn render_report(calculation: &PayrollCalculation) -> String {
    let breakdown = &calculation.breakdown;
    let summary = &calculation.summary;

    [
        format!("👷 Tipo: {}", calculation.worker_type.label()),
        format!("💰 Salário Base: R$ {}", currency(breakdown.base_pay())),
        format!("➕ Benefícios: R$ {}", currency(breakdown.benefits())),
        format!("➕ Extras: R$ {}", currency(breakdown.overtime_pay())),
        format!("📊 Salário Bruto: R$ {}", currency(breakdown.gross_pay())),
        format!("📉 INSS: R$ {}", currency(summary.social_security())),
        format!("📉 IRRF: R$ {}", currency(summary.income_tax())),
        format!("📂 FGTS (8%): R$ {}", currency(summary.severance_fund())),
        format!("✅ Salário Líquido: R$ {}", currency(summary.net_pay())),
        format!("⏰ Valor da Hora: R$ {}", currency(breakdown.hourly_rate())),
        format!(
            "⏱️ Valor do Minuto: R$ {:.4}",
            round_half_up_to(calculation.per_minute_rate(), PER_MINUTE_DECIMAL_PLACES)
        ),
    ]
    .join("\n")
}

fn currency(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}
