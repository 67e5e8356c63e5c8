//! 응답 타임스탬프 헬퍼
//!
//! 모든 응답 본문의 `timestamp` 필드는 서버 로컬 시간 기준
//! `yyyy-MM-dd HH:mm:ss` 형식으로 직렬화됩니다.

use chrono::{Local, NaiveDateTime};
use serde::Serializer;

/// `yyyy-MM-dd HH:mm:ss`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 현재 서버 로컬 시간
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `#[serde(serialize_with = "...")]` 용 직렬화 함수
pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Stamped {
        #[serde(serialize_with = "serialize")]
        at: NaiveDateTime,
    }

    #[test]
    fn should_serialize_without_fraction_or_offset() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(7, 5, 3, 999)
            .unwrap();

        let json = serde_json::to_value(Stamped { at }).unwrap();

        assert_eq!(json["at"], "2024-03-09 07:05:03");
    }

    #[test]
    fn now_should_round_trip_through_format() {
        let formatted = now().format(TIMESTAMP_FORMAT).to_string();

        assert!(NaiveDateTime::parse_from_str(&formatted, TIMESTAMP_FORMAT).is_ok());
    }
}
