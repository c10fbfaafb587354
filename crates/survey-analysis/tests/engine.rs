//! Integration tests for the aggregation engine.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use survey_analysis::{
    box_summary, cross_tabulation, distribution, grouped_mean, numeric_histogram,
    pearson_correlation, pivot_mean, proportion_by_group, scatter_series, summarize_text,
    summarize_text_columns,
};
use survey_model::{
    AnalysisError, CategoricalColumn, NumericColumn, SurveyTable, TextColumn, TextSummary,
};

fn labels(name: &str, values: &[Option<&str>]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

fn numbers(name: &str, values: &[Option<f64>]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

fn survey(columns: Vec<Column>) -> SurveyTable {
    SurveyTable::from_frame(DataFrame::new(columns).unwrap()).unwrap()
}

#[test]
fn cross_tab_of_car_and_home_ownership() {
    let table = survey(vec![
        labels(
            "Q5_CarOwnership",
            &[Some("Yes"), Some("Yes"), Some("No"), Some("Yes")],
        ),
        labels(
            "Q9_HomeOwner",
            &[Some("Yes"), Some("No"), Some("No"), Some("Yes")],
        ),
    ]);

    let tab = cross_tabulation(
        &table,
        CategoricalColumn::CarOwnership,
        CategoricalColumn::HomeOwner,
    )
    .unwrap();

    assert_eq!(tab.count("Yes", "Yes"), 2);
    assert_eq!(tab.count("Yes", "No"), 1);
    assert_eq!(tab.count("No", "Yes"), 0);
    assert_eq!(tab.count("No", "No"), 1);
    assert_eq!(tab.row_labels, vec!["No", "Yes"]);
    assert_eq!(tab.counts, vec![vec![1, 0], vec![1, 2]]);
    assert_eq!(tab.total(), 4);
}

#[test]
fn cross_tab_skips_rows_with_either_value_missing() {
    let table = survey(vec![
        labels("Q5_CarOwnership", &[Some("Yes"), None, Some("No")]),
        labels("Q9_HomeOwner", &[Some("No"), Some("Yes"), None]),
    ]);

    let tab = cross_tabulation(
        &table,
        CategoricalColumn::CarOwnership,
        CategoricalColumn::HomeOwner,
    )
    .unwrap();

    assert_eq!(tab.total(), 1);
    assert_eq!(tab.excluded, 2);
    assert_eq!(tab.row_labels, vec!["Yes"]);
    assert_eq!(tab.col_labels, vec!["No"]);
}

#[test]
fn histogram_excludes_null_ages() {
    let table = survey(vec![numbers(
        "Q1_Age",
        &[Some(25.0), Some(30.0), Some(35.0), Some(40.0), None],
    )]);

    let histogram = numeric_histogram(&table, NumericColumn::Age, 10).unwrap();

    assert_eq!(histogram.observations, 4);
    assert_eq!(histogram.excluded, 1);
    assert_eq!(histogram.mean, 32.5);
    assert_eq!(histogram.min, 25.0);
    assert_eq!(histogram.max, 40.0);
    assert_eq!(histogram.bins.len(), 10);
    let counts: Vec<usize> = histogram.bins.iter().map(|bin| bin.count).collect();
    assert_eq!(counts, vec![1, 0, 0, 1, 0, 0, 1, 0, 0, 1]);
    assert_eq!(histogram.bins[0].lower, 25.0);
    assert_eq!(histogram.bins[9].upper, 40.0);
}

#[test]
fn histogram_of_single_value_widens_the_range() {
    let table = survey(vec![numbers("Q1_Age", &[Some(30.0), Some(30.0)])]);

    let histogram = numeric_histogram(&table, NumericColumn::Age, 2).unwrap();

    assert_eq!(histogram.bins[0].lower, 29.5);
    assert_eq!(histogram.bins[1].upper, 30.5);
    assert_eq!(histogram.bins[1].count, 2);
}

#[test]
fn histogram_errors() {
    let table = survey(vec![numbers("Q1_Age", &[None, None])]);

    assert_eq!(
        numeric_histogram(&table, NumericColumn::Age, 10),
        Err(AnalysisError::EmptyData { column: "Q1_Age" })
    );
    assert_eq!(
        numeric_histogram(&table, NumericColumn::IncomeLevel, 10),
        Err(AnalysisError::MissingColumn {
            column: "Q6_IncomeLevel"
        })
    );
}

#[test]
fn distribution_orders_by_count_then_label() {
    let table = survey(vec![labels(
        "Q3_Education",
        &[
            Some("Tertiary"),
            Some("Primary"),
            Some("Secondary"),
            Some("Secondary"),
            None,
            Some("Primary"),
        ],
    )]);

    let dist = distribution(&table, CategoricalColumn::Education).unwrap();

    let order: Vec<(&str, usize)> = dist
        .counts
        .iter()
        .map(|entry| (entry.label.as_str(), entry.count))
        .collect();
    assert_eq!(
        order,
        vec![("Primary", 2), ("Secondary", 2), ("Tertiary", 1)]
    );
    assert_eq!(dist.excluded, 1);
    assert_eq!(dist.total(), 5);
}

#[test]
fn grouped_mean_reports_undefined_cells() {
    let table = survey(vec![
        labels(
            "Q7_Employed",
            &[Some("Yes"), Some("Yes"), Some("No"), None],
        ),
        numbers(
            "Q10_HoursWorkedPerWeek",
            &[Some(40.0), Some(50.0), None, Some(10.0)],
        ),
        numbers(
            "Q4_LifeSatisfaction",
            &[Some(7.0), None, Some(3.0), Some(9.0)],
        ),
    ]);

    let means = grouped_mean(
        &table,
        CategoricalColumn::Employed,
        &[
            NumericColumn::HoursWorkedPerWeek,
            NumericColumn::LifeSatisfaction,
        ],
    )
    .unwrap();

    assert_eq!(means.group_labels(), vec!["No", "Yes"]);
    assert_eq!(means.mean("Yes", "Q10_HoursWorkedPerWeek"), Some(45.0));
    assert_eq!(means.mean("Yes", "Q4_LifeSatisfaction"), Some(7.0));
    assert_eq!(means.mean("No", "Q10_HoursWorkedPerWeek"), None);
    assert_eq!(means.mean("No", "Q4_LifeSatisfaction"), Some(3.0));
    assert_eq!(means.excluded, 1);
    let cell = means.cell("Yes", "Q4_LifeSatisfaction").unwrap();
    assert_eq!(cell.observations, 1);
    assert_eq!(cell.excluded, 1);
}

#[test]
fn missing_column_does_not_invalidate_earlier_results() {
    let table = survey(vec![
        labels("Q2_Gender", &[Some("Male"), Some("Female")]),
        numbers("Q1_Age", &[Some(30.0), Some(40.0)]),
    ]);
    let before = distribution(&table, CategoricalColumn::Gender).unwrap();

    let err = grouped_mean(
        &table,
        CategoricalColumn::Gender,
        &[NumericColumn::Age, NumericColumn::HoursWorkedPerWeek],
    )
    .unwrap_err();

    assert_eq!(
        err,
        AnalysisError::MissingColumn {
            column: "Q10_HoursWorkedPerWeek"
        }
    );
    assert!(err.to_string().contains("Q10_HoursWorkedPerWeek"));
    assert_eq!(
        distribution(&table, CategoricalColumn::Gender).unwrap(),
        before
    );
    assert!(numeric_histogram(&table, NumericColumn::Age, 10).is_ok());
}

#[test]
fn correlation_is_rounded_to_two_decimals() {
    let table = survey(vec![
        numbers(
            "Q6_IncomeLevel",
            &[Some(1.0), Some(2.0), Some(3.0), Some(4.0), None],
        ),
        numbers(
            "Q4_LifeSatisfaction",
            &[Some(2.0), Some(1.0), Some(4.0), Some(3.0), Some(5.0)],
        ),
    ]);

    let corr = pearson_correlation(
        &table,
        NumericColumn::IncomeLevel,
        NumericColumn::LifeSatisfaction,
    )
    .unwrap();

    assert_eq!(corr.coefficient, 0.6);
    assert_eq!(corr.observations, 4);
    assert_eq!(corr.excluded, 1);
}

#[test]
fn correlation_with_constant_column_is_undefined() {
    let table = survey(vec![
        numbers(
            "Q10_HoursWorkedPerWeek",
            &[Some(40.0), Some(40.0), Some(40.0)],
        ),
        numbers("Q6_IncomeLevel", &[Some(1.0), Some(2.0), Some(3.0)]),
    ]);

    let err = pearson_correlation(
        &table,
        NumericColumn::HoursWorkedPerWeek,
        NumericColumn::IncomeLevel,
    )
    .unwrap_err();

    assert_eq!(
        err,
        AnalysisError::UndefinedStatistic {
            statistic: "correlation".to_string(),
            reason: "zero variance in Q10_HoursWorkedPerWeek".to_string(),
        }
    );
}

#[test]
fn correlation_needs_two_pairs() {
    let table = survey(vec![
        numbers("Q1_Age", &[Some(20.0), None]),
        numbers("Q6_IncomeLevel", &[Some(1.0), Some(2.0)]),
    ]);

    let err = pearson_correlation(&table, NumericColumn::Age, NumericColumn::IncomeLevel)
        .unwrap_err();

    assert!(matches!(err, AnalysisError::UndefinedStatistic { .. }));
    assert!(err.to_string().contains("fewer than 2"));
}

#[test]
fn correlation_of_extreme_magnitudes_is_finite() {
    let table = survey(vec![
        numbers("Q6_IncomeLevel", &[Some(1e160), Some(2e160), Some(3e160)]),
        numbers(
            "Q4_LifeSatisfaction",
            &[Some(3e-170), Some(2e-170), Some(1e-170)],
        ),
    ]);

    let corr = pearson_correlation(
        &table,
        NumericColumn::IncomeLevel,
        NumericColumn::LifeSatisfaction,
    )
    .unwrap();

    assert_eq!(corr.coefficient, -1.0);
    assert_eq!(corr.observations, 3);
}

#[test]
fn infinite_numeric_cell_is_rejected_at_ingestion() {
    let ages = numbers("Q1_Age", &[Some(30.0), Some(f64::INFINITY), None]);
    let frame = DataFrame::new(vec![ages]).unwrap();

    let err = SurveyTable::from_frame(frame).unwrap_err();

    assert!(err.to_string().contains("'Q1_Age' row 1: 'inf'"));
}

#[test]
fn proportions_match_positive_label_exactly() {
    let table = survey(vec![
        labels(
            "Q2_Gender",
            &[Some("Male"), Some("Male"), Some("Male"), Some("Female")],
        ),
        labels("Q5_CarOwnership", &[Some("Yes"), Some("yes"), None, None]),
        labels(
            "Q9_HomeOwner",
            &[Some("Yes"), Some("Yes"), Some("No"), Some("No")],
        ),
    ]);

    let shares = proportion_by_group(
        &table,
        CategoricalColumn::Gender,
        &[CategoricalColumn::CarOwnership, CategoricalColumn::HomeOwner],
        "Yes",
    )
    .unwrap();

    assert_eq!(shares.proportion("Male", "Q5_CarOwnership"), Some(0.5));
    assert_eq!(shares.proportion("Female", "Q5_CarOwnership"), None);
    let male_home = shares.proportion("Male", "Q9_HomeOwner").unwrap();
    assert!((male_home - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(shares.proportion("Female", "Q9_HomeOwner"), Some(0.0));
    assert_eq!(shares.positive_label, "Yes");
}

#[test]
fn box_summary_per_group() {
    let table = survey(vec![
        labels(
            "Q9_HomeOwner",
            &[Some("Yes"), Some("Yes"), Some("Yes"), Some("Yes"), Some("No"), None],
        ),
        numbers(
            "Q1_Age",
            &[Some(50.0), Some(40.0), Some(60.0), Some(70.0), Some(25.0), Some(33.0)],
        ),
    ]);

    let boxes = box_summary(&table, CategoricalColumn::HomeOwner, NumericColumn::Age).unwrap();

    assert_eq!(boxes.groups.len(), 2);
    let no = &boxes.groups[0];
    assert_eq!(no.group, "No");
    assert_eq!((no.min, no.median, no.max), (25.0, 25.0, 25.0));
    let yes = &boxes.groups[1];
    assert_eq!(yes.observations, 4);
    assert_eq!(yes.min, 40.0);
    assert_eq!(yes.q1, 47.5);
    assert_eq!(yes.median, 55.0);
    assert_eq!(yes.q3, 62.5);
    assert_eq!(yes.max, 70.0);
    assert_eq!(boxes.excluded, 1);
}

#[test]
fn box_summary_names_the_empty_column() {
    let no_groups = survey(vec![
        labels("Q9_HomeOwner", &[None, None]),
        numbers("Q1_Age", &[Some(30.0), Some(40.0)]),
    ]);
    let no_values = survey(vec![
        labels("Q9_HomeOwner", &[Some("Yes"), Some("No")]),
        numbers("Q1_Age", &[None, None]),
    ]);

    let group_err = box_summary(&no_groups, CategoricalColumn::HomeOwner, NumericColumn::Age);
    let value_err = box_summary(&no_values, CategoricalColumn::HomeOwner, NumericColumn::Age);

    assert_eq!(group_err.unwrap_err(), AnalysisError::empty("Q9_HomeOwner"));
    assert_eq!(value_err.unwrap_err(), AnalysisError::empty("Q1_Age"));
}

#[test]
fn pivot_mean_unstacks_two_keys() {
    let table = survey(vec![
        labels(
            "Q2_Gender",
            &[Some("Female"), Some("Female"), Some("Male"), Some("Male")],
        ),
        labels(
            "Q3_Education",
            &[Some("Primary"), Some("Tertiary"), Some("Tertiary"), Some("Tertiary")],
        ),
        numbers(
            "Q10_HoursWorkedPerWeek",
            &[Some(30.0), Some(45.0), Some(50.0), Some(40.0)],
        ),
    ]);

    let pivot = pivot_mean(
        &table,
        CategoricalColumn::Gender,
        CategoricalColumn::Education,
        NumericColumn::HoursWorkedPerWeek,
    )
    .unwrap();

    assert_eq!(pivot.row_labels, vec!["Female", "Male"]);
    assert_eq!(pivot.col_labels, vec!["Primary", "Tertiary"]);
    assert_eq!(pivot.mean("Female", "Primary"), Some(30.0));
    assert_eq!(pivot.mean("Male", "Tertiary"), Some(45.0));
    assert_eq!(pivot.mean("Male", "Primary"), None);
}

#[test]
fn scatter_keeps_points_with_both_coordinates() {
    let table = survey(vec![
        numbers("Q1_Age", &[Some(20.0), Some(30.0), None, Some(40.0)]),
        numbers(
            "Q6_IncomeLevel",
            &[Some(100.0), Some(200.0), Some(300.0), Some(300.0)],
        ),
        labels("Q2_Gender", &[Some("Male"), None, Some("Male"), Some("Female")]),
    ]);

    let scatter = scatter_series(
        &table,
        NumericColumn::Age,
        NumericColumn::IncomeLevel,
        Some(CategoricalColumn::Gender),
        None,
    )
    .unwrap();

    assert_eq!(scatter.points.len(), 3);
    assert_eq!(scatter.excluded, 1);
    assert_eq!(scatter.points[1].hue, None);
    assert_eq!(scatter.points[2].hue.as_deref(), Some("Female"));
    assert_eq!(scatter.correlation, Some(1.0));
    assert_eq!(scatter.size_column, None);
}

#[test]
fn scatter_with_size_encoding_requires_the_size_column() {
    let table = survey(vec![
        numbers("Q1_Age", &[Some(20.0)]),
        numbers("Q6_IncomeLevel", &[Some(100.0)]),
    ]);

    let err = scatter_series(
        &table,
        NumericColumn::Age,
        NumericColumn::IncomeLevel,
        None,
        Some(NumericColumn::LifeSatisfaction),
    )
    .unwrap_err();

    assert_eq!(
        err,
        AnalysisError::MissingColumn {
            column: "Q4_LifeSatisfaction"
        }
    );
}

#[test]
fn all_null_text_column_signals_no_data() {
    let table = survey(vec![labels("Q12_OE_FutureConcerns", &[None, None, None])]);

    let summary = summarize_text(&table, TextColumn::FutureConcerns);

    assert_eq!(
        summary,
        TextSummary::NoData {
            column: TextColumn::FutureConcerns
        }
    );
}

#[test]
fn text_corpus_joins_responses_in_row_order() {
    let table = survey(vec![labels(
        "Q11_OE_Neighborhood",
        &[Some("quiet streets"), None, Some("friendly people"), Some(" ")],
    )]);

    let summary = summarize_text(&table, TextColumn::Neighborhood);

    let corpus = summary.corpus().expect("corpus");
    assert_eq!(corpus.text, "quiet streets friendly people  ");
    assert_eq!(corpus.responses, 3);
    assert_eq!(corpus.excluded, 1);
}

#[test]
fn absent_text_columns_are_not_errors() {
    let table = survey(vec![labels(
        "Q14_OE_WorkMotivation",
        &[Some("family")],
    )]);

    let summaries = summarize_text_columns(&table);

    assert_eq!(summaries.len(), 5);
    let with_data: Vec<TextColumn> = summaries
        .iter()
        .filter(|summary| !summary.is_no_data())
        .map(TextSummary::column)
        .collect();
    assert_eq!(with_data, vec![TextColumn::WorkMotivation]);
}
