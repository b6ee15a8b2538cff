use crate::domain::model::{Parity, QuerySelection};

/// 解析失敗時的預設值（奇數）
pub const DEFAULT_LAST_TWO_DIGITS: u32 = 1;

/// Question 1: highest salary not paid on the 1st of a month.
pub const QUESTION_ONE_SQL: &str = "SELECT p.AMOUNT AS SALARY, \
CONCAT(e.FIRST_NAME, ' ', e.LAST_NAME) AS NAME, \
TIMESTAMPDIFF(YEAR, e.DOB, CURDATE()) AS AGE, d.DEPARTMENT_NAME \
FROM PAYMENTS p \
JOIN EMPLOYEE e ON p.EMP_ID = e.EMP_ID \
JOIN DEPARTMENT d ON e.DEPARTMENT = d.DEPARTMENT_ID \
WHERE DAY(p.PAYMENT_TIME) != 1 \
ORDER BY p.AMOUNT DESC \
LIMIT 1;";

/// 取出註冊編號中所有數字的最後兩位
pub fn last_two_digits(reg_no: &str) -> Option<u32> {
    let digits: Vec<char> = reg_no.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 2 {
        return None;
    }

    digits[digits.len() - 2..]
        .iter()
        .collect::<String>()
        .parse()
        .ok()
}

pub fn select_query(reg_no: &str) -> QuerySelection {
    let last_two_digits = match last_two_digits(reg_no) {
        Some(value) => value,
        None => {
            tracing::warn!(
                "⚠️ Could not parse last two digits of registration number '{}', defaulting to odd",
                reg_no
            );
            DEFAULT_LAST_TWO_DIGITS
        }
    };

    let parity = Parity::of(last_two_digits);
    tracing::debug!(
        "Registration number suffix {} is {:?}",
        last_two_digits,
        parity
    );

    // 不論奇偶都提交同一題
    tracing::info!("📝 Solving question 1");
    QuerySelection {
        last_two_digits,
        parity,
        sql: QUESTION_ONE_SQL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_two_digits_from_mixed_identifier() {
        assert_eq!(last_two_digits("REG12347"), Some(47));
        assert_eq!(last_two_digits("22BCE0123"), Some(23));
        assert_eq!(last_two_digits("A1B2"), Some(12));
    }

    #[test]
    fn test_last_two_digits_too_short() {
        assert_eq!(last_two_digits("R1"), None);
        assert_eq!(last_two_digits("ABC"), None);
        assert_eq!(last_two_digits(""), None);
    }

    #[test]
    fn test_select_query_odd_suffix() {
        let selection = select_query("REG12347");

        assert_eq!(selection.last_two_digits, 47);
        assert_eq!(selection.parity, Parity::Odd);
        assert_eq!(selection.sql, QUESTION_ONE_SQL);
    }

    #[test]
    fn test_select_query_falls_back_without_panicking() {
        let selection = select_query("R1");

        assert_eq!(selection.last_two_digits, DEFAULT_LAST_TWO_DIGITS);
        assert_eq!(selection.parity, Parity::Odd);
    }

    #[test]
    fn test_select_query_even_suffix_returns_same_sql() {
        let selection = select_query("REG100");

        assert_eq!(selection.last_two_digits, 0);
        assert_eq!(selection.parity, Parity::Even);
        assert_eq!(selection.sql, QUESTION_ONE_SQL);
    }

    #[test]
    fn test_question_one_sql_shape() {
        assert!(QUESTION_ONE_SQL.starts_with("SELECT p.AMOUNT AS SALARY, CONCAT("));
        assert!(QUESTION_ONE_SQL.ends_with("ORDER BY p.AMOUNT DESC LIMIT 1;"));
        assert!(!QUESTION_ONE_SQL.contains("  "));
    }
}
