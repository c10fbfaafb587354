//! Narrative summary shown at the end of every report.
//!
//! The findings are fixed text written for the reference survey; they are
//! not derived from the uploaded data.

pub const KEY_FINDINGS_TITLE: &str = "Key Findings";

pub const KEY_FINDINGS: &[&str] = &[
    "Tertiary-educated people tend to have higher income and satisfaction.",
    "Divorced respondents show higher work hours and lower satisfaction.",
    "Majority homeowners are over age 40.",
    "Unemployed individuals report lower income and satisfaction.",
    "Text data reveals community bonding and future anxieties (healthcare, war, kids).",
    "Males and married individuals are more likely to own homes and cars.",
    "Higher education is linked to higher earnings.",
    "Those working more hours tend to earn more (positive correlation).",
    "People aged 30-50 report higher income and satisfaction.",
    "Gender and education influence both working hours and income levels.",
    "Married people are more likely to own cars and homes.",
    "Older people are more likely to own homes.",
    "Working hours correlate moderately with income (check scatterplot).",
    "People with low income & long work hours often have low satisfaction.",
    "Employed people report higher income and satisfaction than unemployed ones.",
];
