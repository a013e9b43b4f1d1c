//! News-item view-model.

use chrono::NaiveDate;

use bogholder_domain::NewsItemData;

use crate::format;

/// Display wrapper over one news item.
pub struct NewsItemViewModel {
    data: NewsItemData,
}

impl NewsItemViewModel {
    pub fn new(data: NewsItemData) -> Self {
        Self { data }
    }

    pub fn date(&self) -> NaiveDate {
        self.data.date
    }

    pub fn date_as_text(&self) -> String {
        format::short_date(self.data.date)
    }

    pub fn headline(&self) -> &str {
        &self.data.headline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats_as_short_date() {
        let item = NewsItemViewModel::new(NewsItemData {
            date: NaiveDate::from_ymd_opt(2014, 2, 14).unwrap(),
            headline: "Årsafslutning nærmer sig".to_string(),
        });
        assert_eq!(item.date_as_text(), "14-02-2014");
        assert_eq!(item.headline(), "Årsafslutning nærmer sig");
    }
}
