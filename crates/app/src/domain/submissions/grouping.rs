//! Brand grouping.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::domain::{
    baskets::records::{BasketItemUuid, BasketUuid},
    brands::records::BrandUuid,
    products::records::ProductUuid,
    submissions::records::{LineBrand, SubmissionLine},
};

/// A basket item ready to become an order item.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GroupLine {
    pub(crate) item_uuid: BasketItemUuid,
    pub(crate) product_uuid: ProductUuid,
    pub(crate) quantity: u32,
    pub(crate) size: Option<String>,
    pub(crate) colour: Option<String>,
    pub(crate) notes: Option<String>,
    pub(crate) price: u64,
}

/// Items of one basket that belong to one brand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BrandGroup {
    pub(crate) basket_uuid: BasketUuid,
    pub(crate) brand: LineBrand,
    pub(crate) lines: SmallVec<[GroupLine; 4]>,
    pub(crate) total: u64,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Grouping {
    pub(crate) groups: Vec<BrandGroup>,
    pub(crate) orphans: Vec<BasketItemUuid>,
}

/// Group lines by `(basket, brand)` in order of first appearance.
///
/// Groups are never merged across baskets. Lines without a product or brand
/// are reported as orphans.
pub(crate) fn group_by_brand(lines: impl IntoIterator<Item = SubmissionLine>) -> Grouping {
    let mut grouping = Grouping::default();
    let mut index: FxHashMap<(BasketUuid, BrandUuid), usize> = FxHashMap::default();

    for line in lines {
        let Some((product_uuid, brand)) = line
            .product
            .and_then(|product| product.brand.map(|brand| (product.uuid, brand)))
        else {
            grouping.orphans.push(line.item_uuid);
            continue;
        };

        let line_total = line.price.saturating_mul(u64::from(line.quantity));

        let position = *index
            .entry((line.basket_uuid, brand.uuid))
            .or_insert_with(|| {
                grouping.groups.push(BrandGroup {
                    basket_uuid: line.basket_uuid,
                    brand,
                    lines: SmallVec::new(),
                    total: 0,
                });

                grouping.groups.len() - 1
            });

        let group = &mut grouping.groups[position];

        group.total = group.total.saturating_add(line_total);
        group.lines.push(GroupLine {
            item_uuid: line.item_uuid,
            product_uuid,
            quantity: line.quantity,
            size: line.size,
            colour: line.colour,
            notes: line.notes,
            price: line.price,
        });
    }

    grouping
}

#[cfg(test)]
mod tests {
    use crate::domain::submissions::records::LineProduct;

    use super::*;

    fn brand(name: &str) -> LineBrand {
        LineBrand {
            uuid: BrandUuid::new(),
            name: name.to_string(),
            currency: "NGN".to_string(),
            owner_uuid: None,
        }
    }

    fn line(
        basket: BasketUuid,
        brand: Option<&LineBrand>,
        price: u64,
        quantity: u32,
    ) -> SubmissionLine {
        SubmissionLine {
            basket_uuid: basket,
            item_uuid: BasketItemUuid::new(),
            product: Some(LineProduct {
                uuid: ProductUuid::new(),
                brand: brand.cloned(),
            }),
            quantity,
            size: None,
            colour: None,
            notes: None,
            price,
        }
    }

    #[test]
    fn splits_one_basket_into_one_group_per_brand() {
        let basket = BasketUuid::new();
        let x = brand("X");
        let y = brand("Y");

        let grouping = group_by_brand([
            line(basket, Some(&x), 10, 2),
            line(basket, Some(&y), 5, 1),
        ]);

        assert_eq!(grouping.groups.len(), 2);
        assert_eq!(grouping.groups[0].brand, x);
        assert_eq!(grouping.groups[0].total, 20);
        assert_eq!(grouping.groups[0].lines.len(), 1);
        assert_eq!(grouping.groups[1].brand, y);
        assert_eq!(grouping.groups[1].total, 5);
        assert!(grouping.orphans.is_empty());
    }

    #[test]
    fn accumulates_lines_of_same_brand() {
        let basket = BasketUuid::new();
        let x = brand("X");
        let y = brand("Y");

        let grouping = group_by_brand([
            line(basket, Some(&x), 10, 2),
            line(basket, Some(&y), 5, 1),
            line(basket, Some(&x), 3, 3),
        ]);

        assert_eq!(grouping.groups.len(), 2);
        assert_eq!(grouping.groups[0].total, 29);
        assert_eq!(grouping.groups[0].lines.len(), 2);
    }

    #[test]
    fn does_not_merge_same_brand_across_baskets() {
        let x = brand("X");

        let grouping = group_by_brand([
            line(BasketUuid::new(), Some(&x), 10, 1),
            line(BasketUuid::new(), Some(&x), 10, 1),
        ]);

        assert_eq!(grouping.groups.len(), 2);
        assert_ne!(
            grouping.groups[0].basket_uuid,
            grouping.groups[1].basket_uuid
        );
    }

    #[test]
    fn reports_lines_without_product_or_brand_as_orphans() {
        let basket = BasketUuid::new();
        let x = brand("X");

        let mut no_product = line(basket, Some(&x), 10, 1);
        no_product.product = None;

        let no_brand = line(basket, None, 10, 1);
        let kept = line(basket, Some(&x), 7, 1);

        let orphans = vec![no_product.item_uuid, no_brand.item_uuid];

        let grouping = group_by_brand([no_product, no_brand, kept]);

        assert_eq!(grouping.orphans, orphans);
        assert_eq!(grouping.groups.len(), 1);
        assert_eq!(grouping.groups[0].total, 7);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(group_by_brand([]), Grouping::default());
    }
}
