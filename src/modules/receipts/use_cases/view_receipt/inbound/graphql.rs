use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::receipts::core::item::ReceiptItem;
use crate::modules::receipts::core::receipt::Receipt;
use crate::modules::receipts::core::split::{ItemSplit, SplitShare};
use crate::modules::receipts::use_cases::view_receipt::projection::ReceiptView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReceiptItem {
    pub id: String,
    pub name: String,
    pub unit_price: i64,
    pub quantity: u32,
    pub taxed: bool,
    pub price: i64,
}

impl From<ReceiptItem> for GqlReceiptItem {
    fn from(item: ReceiptItem) -> Self {
        Self {
            price: item.price(),
            id: item.id,
            name: item.name,
            unit_price: item.unit_price,
            quantity: item.quantity,
            taxed: item.taxed,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlItemSplit {
    pub id: String,
    pub item_id: String,
    pub person: String,
    pub kind: String,
    pub amount: Option<i64>,
    pub shares: Option<u32>,
    pub total_shares: Option<u32>,
}

impl From<ItemSplit> for GqlItemSplit {
    fn from(split: ItemSplit) -> Self {
        let (amount, shares, total_shares) = match split.share {
            SplitShare::Absolute { amount } => (Some(amount), None, None),
            SplitShare::Proportional {
                shares,
                total_shares,
            } => (None, Some(shares), Some(total_shares)),
        };
        Self {
            kind: split.share.kind().to_string(),
            id: split.id,
            item_id: split.item_id,
            person: split.person,
            amount,
            shares,
            total_shares,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlPersonTotal {
    pub person: String,
    pub subtotal: i64,
    pub tax: i64,
    pub tip: i64,
    pub total: i64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReceipt {
    pub receipt_id: String,
    pub created_at: i64,
    pub items: Vec<GqlReceiptItem>,
    pub splits: Vec<GqlItemSplit>,
    pub person_totals: Vec<GqlPersonTotal>,
    pub unsplit_amount: i64,
    pub subtotal: i64,
    pub tax: i64,
    pub tip: i64,
    pub grand_total: i64,
    pub edit_count: i64,
    pub split_count: i64,
    pub summary: String,
}

impl From<ReceiptView> for GqlReceipt {
    fn from(view: ReceiptView) -> Self {
        let summary = view.summary_text();
        Self {
            receipt_id: view.receipt_id,
            created_at: view.created_at,
            items: view.items.into_iter().map(Into::into).collect(),
            splits: view.splits.into_iter().map(Into::into).collect(),
            person_totals: view
                .totals
                .person_totals
                .into_iter()
                .map(|(person, totals)| GqlPersonTotal {
                    person,
                    subtotal: totals.subtotal,
                    tax: totals.tax,
                    tip: totals.tip,
                    total: totals.total,
                })
                .collect(),
            unsplit_amount: view.totals.unsplit_amount,
            subtotal: view.totals.subtotal,
            tax: view.totals.tax,
            tip: view.totals.tip,
            grand_total: view.totals.grand_total,
            edit_count: view.edit_count as i64,
            split_count: view.split_count as i64,
            summary,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReceiptBaseline {
    pub receipt_id: String,
    pub created_at: i64,
    pub items: Vec<GqlReceiptItem>,
}

impl From<Receipt> for GqlReceiptBaseline {
    fn from(receipt: Receipt) -> Self {
        Self {
            receipt_id: receipt.id,
            created_at: receipt.created_at,
            items: receipt.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ReceiptQuery;

#[Object]
impl ReceiptQuery {
    async fn receipt(
        &self,
        context: &Context<'_>,
        receipt_id: String,
    ) -> GqlResult<Option<GqlReceipt>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.queries.current(&receipt_id).await?.map(Into::into))
    }

    async fn receipts(&self, context: &Context<'_>) -> GqlResult<Vec<GqlReceiptBaseline>> {
        let state = context.data_unchecked::<AppState>();
        let receipts = state.queries.list().await?;
        Ok(receipts.into_iter().map(Into::into).collect())
    }
}
