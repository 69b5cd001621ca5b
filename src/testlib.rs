use regex::Regex;
use rust_decimal::Decimal;
use std::{fmt::Debug, iter::zip};

use crate::portfolio::{JournalEntry, Operation};
use crate::util::date::pub_testlib::doy_date;

pub fn assert_re(pattern: &str, haystack: &str) {
    let re = Regex::new(pattern).unwrap();
    assert!(re.is_match(haystack),
            "{:?} did not match {:?}", haystack, re);
}

fn eprint_vecs<T: PartialEq + Debug>(left: &Vec<T>, right: &Vec<T>) {
    let mut err_str = "left != right. left: [\n".to_string();
    for o in left {
        err_str += &format!("{:?},\n", o);
    }
    err_str += "] != right: [\n";
    for o in right {
        err_str += &format!("{:?},\n", o);
    }
    eprintln!("{}", err_str);
}

pub fn assert_vec_eq<T: PartialEq + Debug>(left: Vec<T>, right: Vec<T>) {
    assert_vecr_eq(&left, &right);
}

pub fn assert_vecr_eq<T: PartialEq + Debug>(left: &Vec<T>, right: &Vec<T>) {
    if left == right {
        return
    }
    eprint_vecs(left, right);

    if left.len() != right.len() {
        eprintln!("size of left ({}) != size of right ({})", left.len(), right.len());
        panic!();
    }
    for (i, (l, r)) in zip(left, right).enumerate() {
        if l != r {
            eprintln!("Mismatch at index {}:", i);
            eprintln!("left: {:#?} != right: {:#?}", l, r);
        }
    }
    panic!();
}

/// Test journal entry
///
/// Use with `TJe{sym: "FOO", qty: dec!(10), ..TJe::d()}.x()`.
/// The trade date is `t_day` days after January 1st of `year`.
#[derive(Clone, Debug)]
pub struct TJe {
    pub acct: &'static str,
    pub mkt: &'static str,
    pub sym: &'static str,
    pub op: Operation,
    pub qty: Decimal,
    pub price: Decimal,
    pub com: Decimal,
    pub net: Decimal,
    pub year: u32,
    pub t_day: i64,
}

impl TJe {
    pub fn d() -> TJe {
        TJe {
            acct: "ACC1",
            mkt: "CAN",
            sym: "SYM",
            op: Operation::Buy,
            qty: Decimal::ZERO,
            price: Decimal::ZERO,
            com: Decimal::ZERO,
            net: Decimal::ZERO,
            year: 2022,
            t_day: 0,
        }
    }

    pub fn x(&self) -> JournalEntry {
        JournalEntry {
            account_number: self.acct.to_string(),
            account_description: String::new(),
            trade_date: doy_date(self.year, self.t_day),
            settlement_date: Some(doy_date(self.year, self.t_day + 2)),
            processing_date: None,
            market: self.mkt.to_string(),
            symbol: self.sym.to_string(),
            description: String::new(),
            operation: self.op.clone(),
            quantity: self.qty,
            price: self.price,
            commission: self.com,
            net_amount: self.net,
            balance_at_settlement_date: Decimal::ZERO,
            current_balance: Decimal::ZERO,
        }
    }
}
