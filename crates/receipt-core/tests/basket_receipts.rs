//! Whole-basket receipts through the public API.

use receipt_core::{BasketPipeline, ParseError, PipelineError, TaxError};

fn three_baskets() -> Vec<Vec<&'static str>> {
    vec![
        vec![
            "1 book at 12.49",
            "1 music CD at 14.99",
            "1 chocolate bar at 0.85",
        ],
        vec![
            "1 imported box of chocolates at 10.00",
            "1 imported bottle of perfume at 47.50",
        ],
        vec![
            "1 imported bottle of perfume at 27.99",
            "1 bottle of perfume at 18.99",
            "1 packet of headache pills at 9.75",
            "1 box of imported chocolates at 11.25",
        ],
    ]
}

#[test]
fn test_three_basket_receipts() {
    let receipts = BasketPipeline::default().process(&three_baskets()).unwrap();

    assert_eq!(receipts.len(), 3);
    assert_eq!(
        receipts[0],
        "1 book: 13.74\n\
         1 music CD: 16.49\n\
         1 chocolate bar: 0.85\n\
         Sales Taxes: 2.75\n\
         Total: 31.08"
    );
    assert_eq!(
        receipts[1],
        "1 imported box of chocolates: 10.50\n\
         1 imported bottle of perfume: 54.65\n\
         Sales Taxes: 7.65\n\
         Total: 65.15"
    );
    assert_eq!(
        receipts[2],
        "1 imported bottle of perfume: 32.19\n\
         1 bottle of perfume: 20.89\n\
         1 packet of headache pills: 10.75\n\
         1 box of imported chocolates: 11.25\n\
         Sales Taxes: 7.10\n\
         Total: 75.08"
    );
}

#[test]
fn test_isolated_matches_fail_fast_on_good_input() {
    let pipeline = BasketPipeline::default();
    let baskets = three_baskets();

    let fail_fast = pipeline.process(&baskets).unwrap();
    let isolated: Vec<String> = pipeline
        .process_isolated(&baskets)
        .into_iter()
        .map(|outcome| outcome.unwrap().to_string())
        .collect();

    assert_eq!(fail_fast, isolated);
}

#[test]
fn test_quantities_scale_taxes_and_total() {
    let baskets = vec![vec![
        "3 imported bottles of wine at 20.00",
        "2 bags of coffee at 7.99",
        "10 packets of gummy bears at 1,000",
    ]];
    let receipts = BasketPipeline::default().process(&baskets).unwrap();

    assert_eq!(
        receipts[0],
        "3 imported bottles of wine: 23.00\n\
         2 bags of coffee: 7.99\n\
         10 packets of gummy bears: 1,000.00\n\
         Sales Taxes: 9.00\n\
         Total: 10,084.98"
    );
}

#[test]
fn test_raw_file_lines_with_carriage_returns() {
    let raw = "1 16lb bag of Skittles at 16.00\r\n1 Walkman at 99.99\r\n";
    let lines: Vec<&str> = raw.split('\n').collect();
    let receipts = BasketPipeline::default().process(&[lines]).unwrap();

    assert_eq!(
        receipts[0],
        "1 16lb bag of Skittles: 16.00\n\
         1 Walkman: 109.99\n\
         Sales Taxes: 10.00\n\
         Total: 125.99"
    );
}

#[test]
fn test_first_bad_line_aborts_the_run() {
    let mut baskets = three_baskets();
    baskets[1].push("Five phones at 5000.00");

    let err = BasketPipeline::default().process(&baskets).unwrap_err();
    let PipelineError::Line {
        basket,
        line_number,
        source,
        ..
    } = &err
    else {
        panic!("expected a line error, got {err:?}");
    };

    assert_eq!(*basket, 1);
    assert_eq!(*line_number, 3);
    assert_eq!(
        *source,
        ParseError::NonNumericQuantity {
            value: "Five".to_string()
        }
    );
    assert!(err.to_string().contains("Five phones at 5000.00"));
}

#[test]
fn test_isolated_reports_each_bad_basket() {
    let baskets = vec![
        vec!["5 loans at -100"],
        vec!["1 book at 12.49"],
        vec!["5 loans at Hundred"],
    ];
    let outcomes = BasketPipeline::default().process_isolated(&baskets);

    assert!(matches!(
        &outcomes[0],
        Err(PipelineError::Line {
            source: ParseError::InvalidPrice { .. },
            ..
        })
    ));
    assert_eq!(outcomes[1].as_ref().unwrap().total.to_string(), "13.74");
    assert!(matches!(
        &outcomes[2],
        Err(PipelineError::Line {
            source: ParseError::NonNumericPrice { .. },
            ..
        })
    ));
}

#[test]
fn test_out_of_range_amounts_fail_the_basket() {
    let baskets = vec![
        vec!["1 imported car at 79228162514264337593543950335"],
        vec!["18446744073709551615 cars at 100000000000.00"],
        vec!["1 star at 1e40"],
        vec!["1 star at 100000000000000000000000000000"],
        vec!["18446744073709551615 pens at 1.00"],
    ];
    let outcomes = BasketPipeline::default().process_isolated(&baskets);

    for outcome in &outcomes[..2] {
        assert!(matches!(
            outcome,
            Err(PipelineError::Line {
                source: ParseError::Tax(TaxError::AmountOverflow { .. }),
                ..
            })
        ));
    }
    for outcome in &outcomes[2..4] {
        assert!(matches!(
            outcome,
            Err(PipelineError::Line {
                source: ParseError::InvalidPrice { .. },
                ..
            })
        ));
    }
    assert_eq!(
        outcomes[4].as_ref().unwrap().to_string(),
        "18446744073709551615 pens: 1.10\n\
         Sales Taxes: 1,844,674,407,370,955,161.50\n\
         Total: 20,291,418,481,080,506,776.50"
    );
}

#[test]
fn test_basket_total_overflow_fails_fast() {
    let baskets = vec![
        vec!["1 book at 12.49"],
        vec![
            "1 box of chocolates at 79228162514264337593543950335",
            "1 bag of popcorn at 1.00",
        ],
    ];

    let err = BasketPipeline::default().process(&baskets).unwrap_err();
    assert!(matches!(err, PipelineError::Totals { basket: 1, .. }));
    assert_eq!(
        err.to_string(),
        "basket 1: Amount out of range while computing total"
    );
}
