//! Locale-dependent rendering of the numbers produced by `aggregation`.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Period;

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro"
];

const MONTHS_EN_US: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
];

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Locale {
    /// Brazilian Portuguese with amounts in reais.
    #[default]
    PtBr,
    /// US English with amounts in dollars.
    EnUs
}

impl Locale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Some(Locale::PtBr),
            "en-us" | "en" => Some(Locale::EnUs),
            _ => None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    locale: Locale
}

impl Formatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// `R$ 1.234,56` or `$1,234.56`.
    pub fn currency(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let plain = format!("{:.2}", rounded.abs());
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        match self.locale {
            Locale::PtBr => format!("{sign}R$ {},{fraction}", group_thousands(integer, '.')),
            Locale::EnUs => format!("{sign}${}.{fraction}", group_thousands(integer, ','))
        }
    }

    pub fn percent(&self, percent: u32) -> String {
        format!("{percent}%")
    }

    /// `10 de março` or `March 10`.
    pub fn day_month(&self, date: NaiveDateTime) -> String {
        match self.locale {
            Locale::PtBr => format!("{} de {}", date.day(), self.month_name(date.month())),
            Locale::EnUs => format!("{} {}", self.month_name(date.month()), date.day())
        }
    }

    /// Two-digit day, month and year in the locale's order.
    pub fn short_date(&self, date: Option<NaiveDateTime>) -> String {
        let Some(date) = date else {
            return "-".to_string()
        };

        let year = date.year().rem_euclid(100);

        match self.locale {
            Locale::PtBr => format!("{:02}/{:02}/{:02}", date.day(), date.month(), year),
            Locale::EnUs => format!("{:02}/{:02}/{:02}", date.month(), date.day(), year)
        }
    }

    /// `março, 2024` or `March, 2024`.
    pub fn month_year(&self, period: Period) -> String {
        format!("{}, {}", self.month_name(period.month()), period.year())
    }

    pub fn last_income_label(&self, date: Option<NaiveDateTime>) -> String {
        match (date, self.locale) {
            (None, _) => self.no_transactions(),
            (Some(date), Locale::PtBr) => format!("Última entrada dia {}", self.day_month(date)),
            (Some(date), Locale::EnUs) => format!("Last income on {}", self.day_month(date))
        }
    }

    pub fn last_expense_label(&self, date: Option<NaiveDateTime>) -> String {
        match (date, self.locale) {
            (None, _) => self.no_transactions(),
            (Some(date), Locale::PtBr) => format!("Última saída dia {}", self.day_month(date)),
            (Some(date), Locale::EnUs) => format!("Last expense on {}", self.day_month(date))
        }
    }

    /// Interval shown under the net total. It ends at the last income, which
    /// is how the dashboard has always labelled it.
    pub fn interval_label(&self, last_income: Option<NaiveDateTime>) -> String {
        match (last_income, self.locale) {
            (None, _) => self.no_transactions(),
            (Some(date), Locale::PtBr) => format!("01 a {}", self.day_month(date)),
            (Some(date), Locale::EnUs) => format!("01 to {}", self.day_month(date))
        }
    }

    pub fn no_transactions(&self) -> String {
        match self.locale {
            Locale::PtBr => "Não há transações".to_string(),
            Locale::EnUs => "No transactions".to_string()
        }
    }

    fn month_name(&self, month: u32) -> &'static str {
        let index = month.saturating_sub(1).min(11) as usize;

        match self.locale {
            Locale::PtBr => MONTHS_PT_BR[index],
            Locale::EnUs => MONTHS_EN_US[index]
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
