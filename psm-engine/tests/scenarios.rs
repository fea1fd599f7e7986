use approx::assert_relative_eq;
use psm_core::models::{
    AnalysisError, AnalysisInput, AnalysisInputDto, ConfidenceLevel, CostStructure,
    CostStructureDto, MarketSegment, MarketSegmentDto, PriceGrid, PricePoint, PricingError,
    RangeError, SurveyError, SurveyInput, SurveyInputDto,
};
use psm_engine::{EngineSettings, PricingEngine, ShapeKind};
use rstest::*;
use rstest_reuse::{self, *};

use all_shapes::all_shapes;

fn engine(shape: ShapeKind) -> PricingEngine {
    PricingEngine::new(EngineSettings {
        shape,
        ..Default::default()
    })
    .unwrap()
}

// Population 10,000; fixed cost 5,000; variable cost 10; PMC 15, PME 40 from 200 respondents
#[fixture]
pub fn scenario_a() -> AnalysisInputDto {
    AnalysisInputDto {
        segment: MarketSegmentDto {
            name: "scenario a".to_owned(),
            population: 10_000,
        },
        cost: CostStructureDto {
            fixed_cost: 5000.0,
            variable_cost: 10.0,
        },
        survey: SurveyInputDto {
            sample_size: 200,
            pmc_price: 15.0,
            pme_price: 40.0,
        },
        user_price: 25.0,
        price_range: (10.0, 50.0),
        resolution: 100,
        confidence_level: 0.95,
    }
}

#[apply(all_shapes)]
fn scenario_a_break_even(#[case] shape: ShapeKind, scenario_a: AnalysisInputDto) {
    let input = AnalysisInput::try_from(scenario_a).unwrap();
    let result = engine(shape).analyze(&input);

    let break_even = result.break_even.unwrap();
    assert_eq!(break_even.price, 25.0);
    assert_relative_eq!(break_even.quantity, 5000.0 / 15.0, epsilon = 1e-9);
    assert_eq!((break_even.quantity * 10.0).round() / 10.0, 333.3);
}

#[apply(all_shapes)]
fn scenario_a_demand_ordering(#[case] shape: ShapeKind, scenario_a: AnalysisInputDto) {
    let input = AnalysisInput::try_from(scenario_a).unwrap();
    let engine = engine(shape);
    let estimate = engine.estimate(&input.survey, input.confidence);
    let demand = engine.demand_model(&input.segment, estimate);

    let (at_pmc, at_user, at_pme) = (demand.demand(15.0), demand.demand(25.0), demand.demand(40.0));
    assert_relative_eq!(at_pmc, 10_000.0);
    assert!(at_pme < at_user, "{at_pme} >= {at_user}");
    assert!(at_user < at_pmc, "{at_user} >= {at_pmc}");
}

#[apply(all_shapes)]
fn scenario_a_optimum_in_range(#[case] shape: ShapeKind, scenario_a: AnalysisInputDto) {
    let input = AnalysisInput::try_from(scenario_a).unwrap();
    let result = engine(shape).analyze(&input);

    assert!((10.0..=50.0).contains(&result.optimal.price));
    assert!(result.optimal.profit > 0.0);
    let tolerance = 1e-9 * result.optimal.profit.abs().max(1.0);
    for point in result.curve.points.iter() {
        assert!(result.optimal.profit >= point.profit - tolerance);
    }
}

#[rstest]
fn scenario_a_user_price_hints(scenario_a: AnalysisInputDto) {
    let input = AnalysisInput::try_from(scenario_a).unwrap();
    let result = PricingEngine::default().analyze(&input);

    assert_eq!(result.user_price.price, 25.0);
    assert_relative_eq!(result.user_price.gross_margin.unwrap(), 60.0, epsilon = 1e-9);
    assert_eq!(
        result.user_price.sampled,
        psm_core::models::RangePosition::Within
    );
    // the first grid price (the variable cost) loses the fixed cost
    assert!(result.curve.break_even_price().unwrap() > 10.0);
}

#[rstest]
fn scenario_b_inverted_thresholds(mut scenario_a: AnalysisInputDto) {
    scenario_a.survey.pmc_price = 20.0;
    scenario_a.survey.pme_price = 19.0;

    assert_eq!(
        AnalysisInput::try_from(scenario_a).unwrap_err(),
        AnalysisError::InvalidSurvey(SurveyError::Inverted {
            pmc: 20.0,
            pme: 19.0
        })
    );
}

#[rstest]
fn scenario_c_price_at_variable_cost(mut scenario_a: AnalysisInputDto) {
    scenario_a.user_price = 10.0;
    let input = AnalysisInput::try_from(scenario_a).unwrap();
    let result = PricingEngine::default().analyze(&input);

    assert_eq!(
        result.break_even,
        Err(PricingError::NoMargin {
            price: 10.0,
            variable_cost: 10.0
        })
    );
}

#[rstest]
fn scenario_d_inverted_range(mut scenario_a: AnalysisInputDto) {
    scenario_a.price_range = (50.0, 20.0);

    assert_eq!(
        AnalysisInput::try_from(scenario_a).unwrap_err(),
        AnalysisError::InvalidRange(RangeError::Inverted {
            low: 50.0,
            high: 20.0
        })
    );
}

#[apply(all_shapes)]
fn analysis_is_deterministic(#[case] shape: ShapeKind) {
    let input = AnalysisInput {
        segment: MarketSegment::new("repeat", 2500).unwrap(),
        cost: CostStructure::new(1200.0, 4.5).unwrap(),
        survey: SurveyInput::new(80, 9.0, 21.0).unwrap(),
        user_price: PricePoint::new(13.0).unwrap(),
        grid: PriceGrid::new(4.5, 30.0, 257).unwrap(),
        confidence: ConfidenceLevel::new(0.9).unwrap(),
    };
    let engine = engine(shape);

    let first = engine.analyze(&input);
    let second = engine.analyze(&input);

    assert_eq!(first.curve.points.len(), second.curve.points.len());
    for (a, b) in first.curve.points.iter().zip(second.curve.points.iter()) {
        assert_eq!(a.price.to_bits(), b.price.to_bits());
        assert_eq!(a.demand.to_bits(), b.demand.to_bits());
        assert_eq!(a.profit.to_bits(), b.profit.to_bits());
        assert_eq!(a.demand_lower.to_bits(), b.demand_lower.to_bits());
        assert_eq!(a.demand_upper.to_bits(), b.demand_upper.to_bits());
    }
    assert_eq!(first, second);
}

#[apply(all_shapes)]
fn envelope_brackets_demand(#[case] shape: ShapeKind, scenario_a: AnalysisInputDto) {
    let input = AnalysisInput::try_from(scenario_a).unwrap();
    let result = engine(shape).analyze(&input);

    let slack = 1e-9 * 10_000.0;
    for point in result.curve.points.iter() {
        assert!(point.demand_lower <= point.demand + slack, "{point:?}");
        assert!(point.demand <= point.demand_upper + slack, "{point:?}");
    }
}

#[rstest]
fn smaller_samples_widen_the_envelope(scenario_a: AnalysisInputDto) {
    let large = AnalysisInput::try_from(scenario_a).unwrap();
    let small = AnalysisInput {
        survey: SurveyInput::new(20, 15.0, 40.0).unwrap(),
        ..large.clone()
    };
    let engine = PricingEngine::default();

    let (wide, narrow) = (engine.analyze(&small), engine.analyze(&large));
    assert!(wide.sensitivity.pme_interval.width() > narrow.sensitivity.pme_interval.width());

    let spread = |result: &psm_core::models::AnalysisResult| {
        result
            .curve
            .points
            .iter()
            .map(|p| p.demand_upper - p.demand_lower)
            .sum::<f64>()
    };
    assert!(spread(&wide) > spread(&narrow));
}
