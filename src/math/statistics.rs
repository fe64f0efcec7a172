// src/math/statistics.rs

/// 時系列の記述統計量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,       // 標本平均（時間重み付けなし）
    pub amplitude: f64,  // (max - min) / 2
}

/// 時系列の最小・最大・平均・振幅を計算する
///
/// 最小・最大は先頭要素で初期化して一回の走査で求める。
///
/// # 戻り値
/// - 空の系列の場合は `None`
pub fn summarize<I>(values: I) -> Option<SeriesSummary>
where
    I: IntoIterator<Item = f64>,
{
    let mut values = values.into_iter();
    let first = values.next()?;

    let (mut min, mut max, mut sum, mut count) = (first, first, first, 1usize);
    for value in values {
        if value > max {
            max = value;
        }
        if value < min {
            min = value;
        }
        sum += value;
        count += 1;
    }

    Some(SeriesSummary {
        min,
        max,
        mean: sum / count as f64,
        amplitude: (max - min) / 2.0,
    })
}

/// 局所ピーク判定（両隣より厳密に大きい）
///
/// 端点と平坦部はピークとみなさない。
pub fn is_local_peak(values: &[f64], i: usize) -> bool {
    i > 0 && i + 1 < values.len() && values[i] > values[i - 1] && values[i] > values[i + 1]
}

/// 最初の2つの局所ピーク間の時間差
///
/// 2つ目のピークが見つかった時点で走査を打ち切る。
///
/// # 引数
/// - `times`: 各サンプルの時刻
/// - `values`: サンプル値（`times` と同じ長さ）
///
/// # 戻り値
/// - ピークが2つ未満の場合は `None`
pub fn first_peak_interval(times: &[f64], values: &[f64]) -> Option<f64> {
    let n = values.len().min(times.len());
    let mut first_peak: Option<usize> = None;

    for i in 1..n.saturating_sub(1) {
        if !is_local_peak(&values[..n], i) {
            continue;
        }
        match first_peak {
            None => first_peak = Some(i),
            Some(first) => return Some(times[i] - times[first]),
        }
    }
    None
}
