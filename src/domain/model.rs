use std::fmt;
use std::os::raw::c_int;

/// 單次抽取的上限（含）
pub const DRAW_UPPER_BOUND: u32 = 999;

/// stdout 結果行的前綴
pub const RESULT_LABEL: &str = "Result: ";

/// 結果檔案，相對於目前工作目錄
pub const DEFAULT_OUTPUT_FILE: &str = "gui.txt";

/// 兩次連續抽取的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub a: u32,
    pub b: u32,
}

impl Draw {
    pub fn sum(&self) -> Sum {
        Sum(self.a + self.b)
    }
}

/// 兩個抽取值的和，範圍 [0, 2 * DRAW_UPPER_BOUND]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sum(u32);

impl Sum {
    pub const MAX: u32 = 2 * DRAW_UPPER_BOUND;

    pub fn value(&self) -> u32 {
        self.0
    }

    /// 作為行程退出碼；截斷交給作業系統處理
    pub fn exit_status(&self) -> i32 {
        self.0 as i32
    }

    pub fn as_c_int(&self) -> c_int {
        self.0 as c_int
    }

    pub fn is_in_range(value: u32) -> bool {
        value <= Self::MAX
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_sum() {
        let draw = Draw { a: 999, b: 999 };
        assert_eq!(draw.sum().value(), 1998);
        assert_eq!(draw.sum().value(), Sum::MAX);

        let draw = Draw { a: 0, b: 0 };
        assert_eq!(draw.sum().value(), 0);
    }

    #[test]
    fn test_sum_display_is_plain_decimal() {
        let sum = Draw { a: 12, b: 30 }.sum();
        assert_eq!(sum.to_string(), "42");
        assert_eq!(sum.exit_status(), 42);
        assert_eq!(sum.as_c_int(), 42);
    }

    #[test]
    fn test_is_in_range() {
        assert!(Sum::is_in_range(0));
        assert!(Sum::is_in_range(1998));
        assert!(!Sum::is_in_range(1999));
    }
}
