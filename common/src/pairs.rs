//! ペア列挙
//!
//! 2要素の組み合わせ（重複なし・順序なし）を `i < j` の辞書順で生成する。

/// 比較する1組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
    /// 生成順の0始まり番号
    pub index: usize,
    pub first: &'a str,
    pub second: &'a str,
}

/// n件から作られるペア数 n*(n-1)/2
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// 全ペアを生成順に返す
pub fn all_pairs<S: AsRef<str>>(items: &[S]) -> impl Iterator<Item = Pair<'_>> + '_ {
    (0..items.len())
        .flat_map(move |i| (i + 1..items.len()).map(move |j| (i, j)))
        .enumerate()
        .map(move |(index, (i, j))| Pair {
            index,
            first: items[i].as_ref(),
            second: items[j].as_ref(),
        })
}
