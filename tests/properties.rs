use proptest::prelude::*;
use transweave::{Nested, Pipeline};

fn nested(depth: u32) -> impl Strategy<Value = Nested<i16>> {
  let leaf = any::<i16>().prop_map(Nested::Item);
  leaf.prop_recursive(depth, 64, 6, |inner| {
    prop::collection::vec(inner, 0..6).prop_map(Nested::Many)
  })
}

fn leaves(value: &Nested<i16>, out: &mut Vec<i16>) {
  match value {
    Nested::Item(x) => out.push(*x),
    Nested::Many(members) => members.iter().for_each(|m| leaves(m, out)),
  }
}

proptest! {
  #[test]
  fn test_take_is_prefix(items in prop::collection::vec(any::<i32>(), 0..64), n in 0i64..80) {
    let taken = Pipeline::from_array(&items).take(n).unwrap().to_vec().unwrap();
    let end = (n as usize).min(items.len());
    prop_assert_eq!(taken, items[..end].to_vec());
  }

  #[test]
  fn test_drop_is_suffix(items in prop::collection::vec(any::<i32>(), 0..64), n in 0i64..80) {
    let dropped = Pipeline::from_array(&items).drop(n).unwrap().to_vec().unwrap();
    let start = (n as usize).min(items.len());
    prop_assert_eq!(dropped, items[start..].to_vec());
  }

  #[test]
  fn test_drop_then_take_is_slice(
    items in prop::collection::vec(any::<u8>(), 0..64),
    skip in 0i64..70,
    keep in 0i64..70,
  ) {
    let window = Pipeline::from_array(&items)
      .drop(skip)
      .unwrap()
      .take(keep)
      .unwrap()
      .to_vec()
      .unwrap();
    let expected: Vec<u8> = items
      .iter()
      .copied()
      .skip(skip as usize)
      .take(keep as usize)
      .collect();
    prop_assert_eq!(window, expected);
  }

  #[test]
  fn test_map_fusion(items in prop::collection::vec(any::<i32>(), 0..64)) {
    let f = |x: i32| x.wrapping_mul(3);
    let g = |x: i32| x.wrapping_sub(7);
    let chained = Pipeline::from_array(&items).map(f).map(g).to_vec().unwrap();
    let fused = Pipeline::from_array(&items).map(|x| g(f(x))).to_vec().unwrap();
    prop_assert_eq!(chained, fused);
  }

  #[test]
  fn test_filter_matches_iterator(items in prop::collection::vec(any::<i32>(), 0..64), m in 1i32..7) {
    let kept = Pipeline::from_array(&items).filter(|x| x % m == 0).to_vec().unwrap();
    let expected: Vec<i32> = items.iter().copied().filter(|x| x % m == 0).collect();
    prop_assert_eq!(kept, expected);
  }

  #[test]
  fn test_flatten_preserves_leaf_order(input in prop::collection::vec(nested(4), 0..8)) {
    let flat = Pipeline::from_array(&input).flatten().to_vec().unwrap();
    let mut expected = Vec::new();
    input.iter().for_each(|value| leaves(value, &mut expected));
    prop_assert_eq!(flat, expected);
  }

  #[test]
  fn test_range_sum_matches_formula(end in 0u64..2_000) {
    let total = Pipeline::from_range(0u64, end).sum().unwrap();
    prop_assert_eq!(total, end * end.saturating_sub(1) / 2);
  }

  #[test]
  fn test_min_max_match_iterator(items in prop::collection::vec(any::<i64>(), 1..64)) {
    let min = Pipeline::from_array(&items).min().unwrap();
    let max = Pipeline::from_array(&items).max().unwrap();
    prop_assert_eq!(Some(min), items.iter().copied().min());
    prop_assert_eq!(Some(max), items.iter().copied().max());
  }
}
