use chrono::NaiveDate;

use crate::models::{StockDailyData, StockIndicator, StockMoneyFlow, StockMoneyFlowAll};

/// 带交易日的时间序列记录，同一序列内 (symbol, 日期) 唯一
pub trait DatedRecord {
    fn record_date(&self) -> NaiveDate;
}

impl DatedRecord for StockDailyData {
    fn record_date(&self) -> NaiveDate {
        self.trade_date
    }
}

impl DatedRecord for StockIndicator {
    fn record_date(&self) -> NaiveDate {
        self.calc_date
    }
}

impl DatedRecord for StockMoneyFlow {
    fn record_date(&self) -> NaiveDate {
        self.trade_date
    }
}

impl DatedRecord for StockMoneyFlowAll {
    fn record_date(&self) -> NaiveDate {
        self.trade_date
    }
}

/// 锚定行及其在两条副序列中同日的匹配
#[derive(Debug)]
pub struct AlignedDay<'a, A, I, F> {
    pub anchor: &'a A,
    pub indicator: Option<&'a I>,
    pub flow: Option<&'a F>,
}

/// 线性扫描，取第一条日期完全相等的记录。
/// 序列长度受 days 限制，不需要预先建索引。
pub fn find_on_date<T: DatedRecord>(series: &[T], date: NaiveDate) -> Option<&T> {
    series.iter().find(|rec| rec.record_date() == date)
}

/// 以锚定序列的每个日期生成一行，按日期升序返回。
///
/// 副序列中没有对应锚定日期的记录会被丢弃；锚定日期在副序列中缺失时对应字段为 None。
pub fn align<'a, A, I, F>(
    anchors: &'a [A],
    indicators: &'a [I],
    flows: &'a [F],
) -> Vec<AlignedDay<'a, A, I, F>>
where
    A: DatedRecord,
    I: DatedRecord,
    F: DatedRecord,
{
    let mut days: Vec<AlignedDay<'a, A, I, F>> = anchors
        .iter()
        .map(|anchor| {
            let date = anchor.record_date();
            AlignedDay {
                anchor,
                indicator: find_on_date(indicators, date),
                flow: find_on_date(flows, date),
            }
        })
        .collect();

    // 取数时按日期倒序，输出固定为升序
    days.sort_by_key(|day| day.anchor.record_date());
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        date: NaiveDate,
        tag: &'static str,
    }

    impl DatedRecord for Row {
        fn record_date(&self) -> NaiveDate {
            self.date
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn row(d: u32, tag: &'static str) -> Row {
        Row { date: day(d), tag }
    }

    #[test]
    fn empty_anchor_yields_no_rows() {
        let anchors: Vec<Row> = vec![];
        let indicators = vec![row(1, "ind")];
        let flows = vec![row(1, "flow")];

        assert!(align(&anchors, &indicators, &flows).is_empty());
    }

    #[test]
    fn partial_overlap_matches_by_exact_date() {
        // 取数顺序：倒序
        let anchors = vec![row(3, "bar3"), row(2, "bar2"), row(1, "bar1")];
        let indicators = vec![row(3, "ind3"), row(2, "ind2")];
        let flows = vec![row(3, "flow3"), row(1, "flow1")];

        let days = align(&anchors, &indicators, &flows);

        let dates: Vec<NaiveDate> = days.iter().map(|d| d.anchor.date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);

        assert!(days[0].indicator.is_none());
        assert_eq!(days[0].flow.map(|f| f.tag), Some("flow1"));

        assert_eq!(days[1].indicator.map(|i| i.tag), Some("ind2"));
        assert!(days[1].flow.is_none());

        assert_eq!(days[2].indicator.map(|i| i.tag), Some("ind3"));
        assert_eq!(days[2].flow.map(|f| f.tag), Some("flow3"));
    }

    #[test]
    fn dangling_side_records_are_dropped() {
        let anchors = vec![row(5, "bar5")];
        let indicators = vec![row(4, "ind4"), row(6, "ind6")];
        let flows = vec![row(7, "flow7")];

        let days = align(&anchors, &indicators, &flows);

        assert_eq!(days.len(), 1);
        assert!(days[0].indicator.is_none());
        assert!(days[0].flow.is_none());
    }

    #[test]
    fn output_is_ascending_for_any_input_order() {
        let anchors = vec![row(2, "b"), row(9, "c"), row(1, "a"), row(4, "d")];
        let days = align::<Row, Row, Row>(&anchors, &[], &[]);

        let dates: Vec<NaiveDate> = days.iter().map(|d| d.anchor.date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(4), day(9)]);
    }

    #[test]
    fn find_on_date_returns_first_match() {
        let series = vec![row(1, "first"), row(1, "second")];
        assert_eq!(find_on_date(&series, day(1)).map(|r| r.tag), Some("first"));
        assert!(find_on_date(&series, day(2)).is_none());
    }
}
