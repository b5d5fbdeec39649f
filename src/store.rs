//! Page State Store
//!
//! All mutable page state in one structure, wrapped in a `reactive_stores`
//! store for field-level reactivity. The handlers here are plain methods so
//! they can be exercised without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::encoding::try_fix_encoding;
use crate::menu::decode_menu;
use crate::models::MealRecord;
use crate::week::{format_date_tag, week_nav, WeekNav, NO_DATE_TAG};

pub const STATUS_LOADING: &str = "급식 데이터를 불러오는 중...";
pub const STATUS_LOADED: &str = "급식 데이터를 불러왔습니다.";
pub const STATUS_FETCH_FAILED: &str = "급식 데이터를 가져오지 못했습니다. fmSeq를 확인해 주세요.";
pub const STATUS_SEARCHING: &str = "다음 급식을 찾는 중...";
pub const STATUS_NOT_FOUND: &str = "다음 급식을 찾지 못했어요. 번호를 직접 입력해 주세요.";
pub const STATUS_LOAD_FIRST: &str = "먼저 급식을 불러와 주세요.";

pub const ITEM_LOAD_FAILED: &str = "급식 데이터를 불러오지 못했어요.";
pub const ITEM_NO_MENU: &str = "등록된 급식 메뉴가 없습니다.";
pub const DATE_MISSING: &str = "날짜 정보 없음";
pub const PHOTO_ALT_DEFAULT: &str = "급식 사진";
pub const PHOTO_ALT_UPLOADED: &str = "업로드한 급식 사진";

/// What the dish list currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MenuDisplay {
    /// Nothing requested yet
    #[default]
    Pending,
    /// Request or parse failed
    Failed,
    /// Record loaded but it has no dishes
    Empty,
    Dishes(Vec<String>),
}

impl MenuDisplay {
    /// List entries to render, placeholders included
    pub fn entries(&self) -> Vec<String> {
        match self {
            MenuDisplay::Pending => Vec::new(),
            MenuDisplay::Failed => vec![ITEM_LOAD_FAILED.to_string()],
            MenuDisplay::Empty => vec![ITEM_NO_MENU.to_string()],
            MenuDisplay::Dishes(dishes) => dishes.clone(),
        }
    }
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Text of the `fmSeq` input
    pub seq_input: String,
    pub menu: MenuDisplay,
    /// Date line above the menu
    pub date_tag: String,
    /// Week strip; `None` until a dated record has been rendered
    pub week: Option<WeekNav>,
    /// `fmSeq: N · title`
    pub meta: String,
    pub status: String,
    /// Agent mode widens "find next" to the configured probe limit
    pub agent_mode: bool,
    /// Object URL of the picked photo
    pub photo_url: Option<String>,
}

impl PageState {
    pub fn new(initial_seq: Option<String>) -> Self {
        Self {
            seq_input: initial_seq.unwrap_or_default(),
            date_tag: NO_DATE_TAG.to_string(),
            ..Default::default()
        }
    }

    /// Numeric reading of the input; empty or garbage reads as 0
    pub fn current_seq(&self) -> i64 {
        self.seq_input.trim().parse().unwrap_or(0)
    }

    /// Trimmed identifier to load on submit, if any
    pub fn submitted_seq(&self) -> Option<String> {
        let seq = self.seq_input.trim();
        (!seq.is_empty()).then(|| seq.to_string())
    }

    pub fn begin_fetch(&mut self) {
        self.status = STATUS_LOADING.to_string();
    }

    /// Move the identifier by `delta`, never below 1, and return it
    pub fn step(&mut self, delta: i64) -> String {
        let next = self.current_seq().saturating_add(delta).max(1);
        self.seq_input = next.to_string();
        self.seq_input.clone()
    }

    /// Delta of a weekday button; reports an error status before any week is known
    pub fn weekday_delta(&mut self, offset: usize) -> Option<i64> {
        let delta = self.week.as_ref().and_then(|week| week.delta(offset));
        if delta.is_none() {
            self.status = STATUS_LOAD_FIRST.to_string();
        }
        delta
    }

    pub fn probe_limit(&self, agent_limit: u32) -> u32 {
        if self.agent_mode {
            agent_limit
        } else {
            1
        }
    }

    pub fn begin_search(&mut self) {
        self.status = STATUS_SEARCHING.to_string();
    }

    /// Apply the outcome of "find next"
    pub fn finish_search(&mut self, found: Option<(i64, MealRecord)>) {
        match found {
            Some((seq, record)) => {
                self.seq_input = seq.to_string();
                self.render(Some(&record));
            }
            None => self.status = STATUS_NOT_FOUND.to_string(),
        }
    }

    /// Render a fetched record, or the failure state for `None`
    pub fn render(&mut self, record: Option<&MealRecord>) {
        self.meta.clear();

        let Some(record) = record else {
            self.menu = MenuDisplay::Failed;
            self.date_tag = NO_DATE_TAG.to_string();
            self.status = STATUS_FETCH_FAILED.to_string();
            return;
        };

        let dishes = decode_menu(record.content.as_deref());

        self.date_tag = match record.date.as_ref() {
            Some(date) => format_date_tag(Some(date)),
            None => DATE_MISSING.to_string(),
        };
        if let Some(week) = week_nav(record.date.as_ref()) {
            self.week = Some(week);
        }

        self.menu = if dishes.is_empty() {
            MenuDisplay::Empty
        } else {
            MenuDisplay::Dishes(dishes)
        };

        let title = try_fix_encoding(record.title.as_deref().unwrap_or_default());
        let seq = record.seq.as_deref().unwrap_or("-");
        self.meta = if title.is_empty() {
            format!("fmSeq: {}", seq)
        } else {
            format!("fmSeq: {} · {}", seq, title)
        };
        self.status = STATUS_LOADED.to_string();
    }

    /// Swap in a new photo URL, returning the one it replaces
    pub fn replace_photo(&mut self, url: String) -> Option<String> {
        self.photo_url.replace(url)
    }

    pub fn photo_src(&self, fallback: &str) -> String {
        self.photo_url.clone().unwrap_or_else(|| fallback.to_string())
    }

    pub fn photo_alt(&self) -> &'static str {
        if self.photo_url.is_some() {
            PHOTO_ALT_UPLOADED
        } else {
            PHOTO_ALT_DEFAULT
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
