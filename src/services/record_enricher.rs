use std::fmt::Debug;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;

use super::date_aligner::{AlignedDay, DatedRecord};
use crate::models::{StockDailyData, StockIndicator, StockMoneyFlow, StockMoneyFlowAll};

/// 技术指标字段，未计算的为 null
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorFields {
    pub ma5: Option<BigDecimal>,
    pub ma10: Option<BigDecimal>,
    pub ma20: Option<BigDecimal>,
    pub ma60: Option<BigDecimal>,
    pub macd: Option<BigDecimal>,
    pub dif: Option<BigDecimal>,
    pub dea: Option<BigDecimal>,
    pub k: Option<BigDecimal>,
    pub d: Option<BigDecimal>,
    pub j: Option<BigDecimal>,
    pub rsi6: Option<BigDecimal>,
    pub rsi12: Option<BigDecimal>,
    pub rsi24: Option<BigDecimal>,
    pub boll_upper: Option<BigDecimal>,
    pub boll_mid: Option<BigDecimal>,
    pub boll_lower: Option<BigDecimal>,
}

impl From<&StockIndicator> for IndicatorFields {
    fn from(ind: &StockIndicator) -> Self {
        Self {
            ma5: ind.ma5.clone(),
            ma10: ind.ma10.clone(),
            ma20: ind.ma20.clone(),
            ma60: ind.ma60.clone(),
            macd: ind.macd.clone(),
            dif: ind.dif.clone(),
            dea: ind.dea.clone(),
            k: ind.k.clone(),
            d: ind.d.clone(),
            j: ind.j.clone(),
            rsi6: ind.rsi6.clone(),
            rsi12: ind.rsi12.clone(),
            rsi24: ind.rsi24.clone(),
            boll_upper: ind.boll_upper.clone(),
            boll_mid: ind.boll_mid.clone(),
            boll_lower: ind.boll_lower.clone(),
        }
    }
}

/// 个股资金流字段
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoneyFlowFields {
    pub main_net: Option<BigDecimal>,
    pub retail_net: Option<BigDecimal>,
    pub large_order_ratio: Option<BigDecimal>,
    pub medium_order_ratio: Option<BigDecimal>,
    pub small_order_ratio: Option<BigDecimal>,
}

/// 全市场资金流（按时间跨度）字段
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedFlowFields {
    #[serde(rename = "in_amount")]
    pub inflow_amount: Option<BigDecimal>,
    #[serde(rename = "out_amount")]
    pub outflow_amount: Option<BigDecimal>,
    pub net_amount: Option<BigDecimal>,
    pub turnover: Option<BigDecimal>,
}

/// 可并入日线的资金流记录。两种资金流共用同一套对齐与合并逻辑，
/// 只是输出字段不同。
pub trait FlowRecord: DatedRecord {
    type Fields: Serialize + Default + Clone + Debug;

    fn flow_fields(&self) -> Self::Fields;
}

impl FlowRecord for StockMoneyFlow {
    type Fields = MoneyFlowFields;

    fn flow_fields(&self) -> MoneyFlowFields {
        MoneyFlowFields {
            main_net: self.main_net.clone(),
            retail_net: self.retail_net.clone(),
            large_order_ratio: self.large_order_ratio.clone(),
            medium_order_ratio: self.medium_order_ratio.clone(),
            small_order_ratio: self.small_order_ratio.clone(),
        }
    }
}

impl FlowRecord for StockMoneyFlowAll {
    type Fields = AggregatedFlowFields;

    fn flow_fields(&self) -> AggregatedFlowFields {
        AggregatedFlowFields {
            inflow_amount: self.inflow_amount.clone(),
            outflow_amount: self.outflow_amount.clone(),
            net_amount: self.net_amount.clone(),
            turnover: self.turnover.clone(),
        }
    }
}

/// 合并后的单日记录，字段集合固定
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedDay<F> {
    pub trade_date: NaiveDate,
    pub open: BigDecimal,
    pub close: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub volume: i64,
    pub turnover_rate: BigDecimal,
    pub change_percent: BigDecimal,
    #[serde(flatten)]
    pub indicators: IndicatorFields,
    #[serde(flatten)]
    pub flow: F,
}

/// 将锚定日线与匹配到的指标、资金流合并为一条记录。
///
/// 副序列未匹配时使用零值记录（字段全部为 null），而不是省略字段。
/// 因此调用方无法区分"该日无记录"和"记录存在但值为空"。
pub fn enrich<F: FlowRecord>(
    day: &AlignedDay<'_, StockDailyData, StockIndicator, F>,
) -> EnrichedDay<F::Fields> {
    let bar = day.anchor;
    EnrichedDay {
        trade_date: bar.trade_date,
        open: bar.open.clone(),
        close: bar.close.clone(),
        high: bar.high.clone(),
        low: bar.low.clone(),
        volume: bar.volume,
        turnover_rate: bar.turnover_rate.clone(),
        change_percent: bar.change_percent.clone(),
        indicators: day.indicator.map(IndicatorFields::from).unwrap_or_default(),
        flow: day.flow.map(FlowRecord::flow_fields).unwrap_or_default(),
    }
}
