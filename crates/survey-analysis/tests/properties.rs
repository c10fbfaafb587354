//! Property tests for the aggregation engine.

use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use survey_analysis::{
    cross_tabulation, distribution, grouped_mean, pearson_correlation, proportion_by_group,
};
use survey_model::{AnalysisError, CategoricalColumn, NumericColumn, SurveyTable};

const GENDERS: [&str; 3] = ["Female", "Male", "Other"];
const ANSWERS: [&str; 2] = ["No", "Yes"];

#[derive(Debug, Clone)]
struct Row {
    gender: Option<usize>,
    car: Option<usize>,
    income: Option<f64>,
    satisfaction: Option<f64>,
}

fn row() -> impl Strategy<Value = Row> {
    (
        proptest::option::of(0..GENDERS.len()),
        proptest::option::of(0..ANSWERS.len()),
        proptest::option::of(-1000.0f64..1000.0),
        proptest::option::of(0.0f64..10.0),
    )
        .prop_map(|(gender, car, income, satisfaction)| Row {
            gender,
            car,
            income,
            satisfaction,
        })
}

fn build(rows: &[Row]) -> SurveyTable {
    let gender: Vec<Option<&str>> = rows.iter().map(|r| r.gender.map(|i| GENDERS[i])).collect();
    let car: Vec<Option<&str>> = rows.iter().map(|r| r.car.map(|i| ANSWERS[i])).collect();
    let income: Vec<Option<f64>> = rows.iter().map(|r| r.income).collect();
    let satisfaction: Vec<Option<f64>> = rows.iter().map(|r| r.satisfaction).collect();
    let columns: Vec<Column> = vec![
        Series::new("Q2_Gender".into(), gender).into_column(),
        Series::new("Q5_CarOwnership".into(), car).into_column(),
        Series::new("Q6_IncomeLevel".into(), income).into_column(),
        Series::new("Q4_LifeSatisfaction".into(), satisfaction).into_column(),
    ];
    SurveyTable::from_frame(DataFrame::new(columns).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn grouped_mean_groups_are_distinct_non_null_values(rows in proptest::collection::vec(row(), 0..40)) {
        let table = build(&rows);
        let expected: BTreeSet<&str> = rows
            .iter()
            .filter_map(|r| r.gender.map(|i| GENDERS[i]))
            .collect();

        match grouped_mean(&table, CategoricalColumn::Gender, &[NumericColumn::IncomeLevel]) {
            Ok(means) => {
                let actual: BTreeSet<&str> = means.group_labels().into_iter().collect();
                prop_assert_eq!(actual, expected);
                prop_assert_eq!(means.groups.len(), means.group_labels().len());
            }
            Err(err) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(err, AnalysisError::EmptyData { column: "Q2_Gender" });
            }
        }
    }

    #[test]
    fn correlation_is_symmetric(rows in proptest::collection::vec(row(), 0..40)) {
        let table = build(&rows);
        let forward = pearson_correlation(&table, NumericColumn::IncomeLevel, NumericColumn::LifeSatisfaction)
            .map(|c| c.coefficient);
        let backward = pearson_correlation(&table, NumericColumn::LifeSatisfaction, NumericColumn::IncomeLevel)
            .map(|c| c.coefficient);
        prop_assert_eq!(&forward, &backward);
        if let Ok(coefficient) = forward {
            prop_assert!((-1.0..=1.0).contains(&coefficient));
        }
    }

    #[test]
    fn cross_tab_total_counts_complete_rows(rows in proptest::collection::vec(row(), 0..40)) {
        let table = build(&rows);
        let complete = rows.iter().filter(|r| r.gender.is_some() && r.car.is_some()).count();

        match cross_tabulation(&table, CategoricalColumn::Gender, CategoricalColumn::CarOwnership) {
            Ok(tab) => {
                prop_assert_eq!(tab.total(), complete);
                prop_assert_eq!(tab.excluded, rows.len() - complete);
                for row in &tab.counts {
                    prop_assert_eq!(row.len(), tab.col_labels.len());
                }
            }
            Err(err) => {
                prop_assert_eq!(complete, 0);
                prop_assert!(
                    matches!(err, AnalysisError::EmptyData { .. }),
                    "expected EmptyData, got {:?}",
                    err
                );
            }
        }
    }

    #[test]
    fn aggregations_are_idempotent(rows in proptest::collection::vec(row(), 0..40)) {
        let table = build(&rows);

        prop_assert_eq!(
            distribution(&table, CategoricalColumn::Gender),
            distribution(&table, CategoricalColumn::Gender)
        );
        prop_assert_eq!(
            grouped_mean(&table, CategoricalColumn::Gender, &[NumericColumn::IncomeLevel, NumericColumn::LifeSatisfaction]),
            grouped_mean(&table, CategoricalColumn::Gender, &[NumericColumn::IncomeLevel, NumericColumn::LifeSatisfaction])
        );
        prop_assert_eq!(
            proportion_by_group(&table, CategoricalColumn::Gender, &[CategoricalColumn::CarOwnership], "Yes"),
            proportion_by_group(&table, CategoricalColumn::Gender, &[CategoricalColumn::CarOwnership], "Yes")
        );
    }

    #[test]
    fn proportions_stay_within_unit_interval(rows in proptest::collection::vec(row(), 1..40)) {
        let table = build(&rows);
        if let Ok(shares) = proportion_by_group(&table, CategoricalColumn::Gender, &[CategoricalColumn::CarOwnership], "Yes") {
            for group in &shares.groups {
                for cell in &group.cells {
                    match cell.proportion {
                        Some(p) => prop_assert!((0.0..=1.0).contains(&p)),
                        None => prop_assert_eq!(cell.observations, 0),
                    }
                }
            }
        }
    }
}
