//! End-to-end flow: calculator, observers and history working together.

use recalc::core::{Calculation, History, HistoryOutcome};
use recalc::observer::{
    AutoSaveObserver, CalculationObserver, HistoryRecorder, LoggingObserver, ObserverError,
};
use recalc::{persistence, Calculator};
use rust_decimal::Decimal;
use std::fs;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Writes `<label>:<operation>` to a shared journal.
struct Tagged {
    label: &'static str,
    journal: Arc<Mutex<Vec<String>>>,
}

impl CalculationObserver for Tagged {
    fn name(&self) -> &str {
        self.label
    }

    fn receive(&self, calculation: &Calculation) -> Result<(), ObserverError> {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.label, calculation.operation));
        Ok(())
    }
}

#[test]
fn concrete_scenarios() {
    let calculator = Calculator::new();

    assert_eq!(
        calculator.calculate(d("10"), d("5"), "add").unwrap(),
        Calculation::new(d("10"), d("5"), "add", d("15"))
    );

    let err = calculator.calculate(d("10"), d("0"), "divide").unwrap_err();
    assert!(err.to_string().ends_with("Cannot divide by zero."));

    let err = calculator.calculate(d("-4"), d("2"), "root").unwrap_err();
    assert!(err
        .to_string()
        .ends_with("Cannot calculate an even root of a negative number."));

    assert_eq!(
        calculator.calculate(d("-8"), d("3"), "root").unwrap().result,
        d("-2")
    );
}

#[test]
fn fan_out_order_and_detach() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let first: Arc<dyn CalculationObserver> = Arc::new(Tagged {
        label: "first",
        journal: Arc::clone(&journal),
    });
    let second: Arc<dyn CalculationObserver> = Arc::new(Tagged {
        label: "second",
        journal: Arc::clone(&journal),
    });

    let mut calculator = Calculator::new();
    calculator.attach(Arc::clone(&first));
    calculator.attach(Arc::clone(&second));

    calculator.calculate(d("1"), d("2"), "add").unwrap();
    calculator.detach(&first);
    calculator.calculate(d("1"), d("2"), "subtract").unwrap();

    assert_eq!(
        *journal.lock().unwrap(),
        vec!["first:add", "second:add", "second:subtract"]
    );
}

#[test]
fn caller_driven_history_with_undo_redo() {
    let calculator = Calculator::new();
    let mut history = History::new();

    for (a, b, op) in [("10", "5", "add"), ("15", "2", "multiply"), ("30", "10", "subtract")] {
        history.add_calculation(calculator.calculate(d(a), d(b), op).unwrap());
    }
    assert_eq!(history.len(), 3);

    assert_eq!(history.undo(), HistoryOutcome::Undone);
    assert_eq!(history.undo(), HistoryOutcome::Undone);
    assert_eq!(history.calculations()[0].result, d("15"));

    history.add_calculation(calculator.calculate(d("2"), d("10"), "power").unwrap());
    assert_eq!(history.redo(), HistoryOutcome::NothingToRedo);
    assert_eq!(history.calculations()[1].result, d("1024"));
}

#[test]
fn wired_observers_persist_every_calculation() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("calculator.log");
    let csv_path = dir.path().join("history.csv");

    let history = Arc::new(Mutex::new(History::new()));
    let mut calculator = Calculator::new();
    calculator.attach(Arc::new(HistoryRecorder::new(Arc::clone(&history))));
    calculator.attach(Arc::new(LoggingObserver::open(&log_path).unwrap()));
    calculator.attach(Arc::new(AutoSaveObserver::new(Arc::clone(&history), &csv_path)));

    calculator.calculate(d("100"), d("50"), "add").unwrap();
    calculator.calculate(d("7"), d("2"), "int_divide").unwrap();

    let saved = persistence::read_calculations(&csv_path).unwrap();
    assert_eq!(saved, history.lock().unwrap().calculations());
    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        "operand_a,operand_b,operation,result\n100,50,add,150\n7,2,int_divide,3\n"
    );

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Operation: int_divide, Operands: (7, 2), Result: 3"));
}
