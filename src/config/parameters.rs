// src/config/parameters.rs

use serde::Deserialize;

/// Lotka-Volterra モデルの係数
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub a: f64, // 被食者の増加率
    pub b: f64, // 捕食効率
    pub c: f64, // 捕食者の死亡率
    pub d: f64, // 被食者から捕食者への変換効率
}

impl ModelParameters {
    /// 非自明な平衡点 (c/d, a/b) を返す
    ///
    /// # 戻り値
    /// - `b` または `d` がゼロの場合は `None`
    pub fn equilibrium(&self) -> Option<(f64, f64)> {
        if self.b == 0.0 || self.d == 0.0 {
            return None;
        }
        Some((self.c / self.d, self.a / self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equilibrium() {
        let params = ModelParameters { a: 1.0, b: 0.5, c: 0.75, d: 0.25 };
        assert_eq!(params.equilibrium(), Some((3.0, 2.0)));
    }

    #[test]
    fn test_equilibrium_degenerate() {
        let params = ModelParameters { a: 1.0, b: 0.0, c: 0.75, d: 0.25 };
        assert_eq!(params.equilibrium(), None);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "a: 1.0\nb: 0.5\nc: 0.75\nd: 0.25\n";
        let params: ModelParameters = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(params, ModelParameters { a: 1.0, b: 0.5, c: 0.75, d: 0.25 });
    }
}
