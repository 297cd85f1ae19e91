use serde::{Deserialize, Serialize};

/// Supported interface languages. Traditional Chinese is the default,
/// mirroring the original tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Language::Zh => "聖誕交換禮物",
            Language::En => "Christmas Gift Exchange",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Language::Zh => "為禮物標上號碼，然後輸入參與人數",
            Language::En => "Label the gifts with numbers and then enter the number of people",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Language::Zh => "參與人數 *",
            Language::En => "Number of People *",
        }
    }

    pub fn start_label(self) -> &'static str {
        match self {
            Language::Zh => "開始",
            Language::En => "START",
        }
    }

    pub fn draw_label(self) -> &'static str {
        match self {
            Language::Zh => "抽取禮物",
            Language::En => "DRAW GIFT",
        }
    }

    pub fn redraw_label(self) -> &'static str {
        match self {
            Language::Zh => "重抽一次",
            Language::En => "DRAW AGAIN",
        }
    }

    pub fn restart_label(self) -> &'static str {
        match self {
            Language::Zh => "重新開始",
            Language::En => "RESTART",
        }
    }

    pub fn all_results_label(self) -> &'static str {
        match self {
            Language::Zh => "所有結果",
            Language::En => "SHOW ALL DRAW RECORDS",
        }
    }

    pub fn collapse_label(self, collapsed: bool) -> &'static str {
        match (self, collapsed) {
            (Language::Zh, true) => "展開",
            (Language::Zh, false) => "收合",
            (Language::En, true) => "EXPAND",
            (Language::En, false) => "COLLAPSE",
        }
    }

    pub fn invalid_count_message(self) -> &'static str {
        match self {
            Language::Zh => "請輸入有效的參與人數 (必須為正整數)",
            Language::En => "Please enter a valid number of participants (positive integer)",
        }
    }

    /// Message shown above the revealed number. `index == total` means the
    /// final participant and switches to the closing variant.
    pub fn participant_gift(self, index: u32, total: u32) -> String {
        match self {
            Language::Zh => {
                if index == total {
                    "最後一位抽中的禮物號碼".to_string()
                } else {
                    format!("第{}位抽中的禮物號碼", index)
                }
            }
            Language::En => {
                if index == total {
                    "The final gift number drawn".to_string()
                } else {
                    format!("Gift number drawn by participant {}", index)
                }
            }
        }
    }

    /// Label for one entry of the results list.
    pub fn gift_item(self, gift_number: u32) -> String {
        match self {
            Language::Zh => format!("禮物 {}", gift_number),
            Language::En => format!("Gift {}", gift_number),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
