//! Console text shown to the operator.

// =============================================================================
// Startup
// =============================================================================

pub const TABLES_CREATED: &str = "✅ 資料表建立完成";
pub const TABLES_PRESENT: &str = "✅ 所有資料表皆已存在";

// =============================================================================
// Menu
// =============================================================================

pub const MENU_LINES: [&str; 7] = [
    "***************選單***************",
    "1. 新增銷售記錄",
    "2. 顯示銷售報表",
    "3. 更新銷售記錄",
    "4. 刪除銷售記錄",
    "5. 離開",
    "**********************************",
];

pub const MENU_PROMPT: &str = "請選擇操作項目(Enter 離開)：";
pub const MENU_OPTION_ERROR: &str = "=> 請輸入有效的選項（1-5）";

// =============================================================================
// Prompts
// =============================================================================

pub const SALE_DATE_PROMPT: &str = "請輸入銷售日期 (YYYY-MM-DD)：";
pub const MEMBER_ID_PROMPT: &str = "請輸入會員編號：";
pub const BOOK_ID_PROMPT: &str = "請輸入書籍編號：";
pub const QUANTITY_PROMPT: &str = "請輸入購買數量：";
pub const DISCOUNT_PROMPT: &str = "請輸入折扣金額：";
pub const UPDATE_SID_PROMPT: &str = "請選擇要更新的銷售編號 (輸入數字或按 Enter 取消):";
pub const NEW_DISCOUNT_PROMPT: &str = "請輸入新的折扣金額：";
pub const DELETE_SID_PROMPT: &str = "請選擇要刪除的銷售編號 (輸入數字或按 Enter 取消): ";

// =============================================================================
// Errors
// =============================================================================

pub const DATE_FORMAT_ERROR: &str = "=> 錯誤：銷售日期格式錯誤，請重新輸入";
pub const QUANTITY_NOT_POSITIVE: &str = "=> 錯誤：數量必須為正整數，請重新輸入";
pub const DISCOUNT_NOT_POSITIVE: &str = "=> 錯誤：折扣必須為正整數，請重新輸入";
pub const AMOUNT_NOT_INTEGER: &str = "=> 錯誤：數量或折扣必須為整數，請重新輸入";
pub const SALE_ID_NOT_POSITIVE: &str = "=> 錯誤：銷售編號必須為正整數，請重新輸入";
pub const SALE_ID_NOT_INTEGER: &str = "=> 錯誤：銷售編號或折扣必須為整數，請重新輸入";
pub const INVALID_REFERENCE: &str = "=> 錯誤：會員編號或書籍編號無效";
pub const INVALID_NUMBER: &str = "=> 錯誤：請輸入有效的數字";
pub const UPDATE_FAILED: &str = "=> 錯誤：銷售記錄更新失敗";
pub const DELETE_FAILED: &str = "=> 錯誤：銷售記錄刪除失敗";
pub const LOAD_FAILED: &str = "=> 錯誤：無法讀取銷售資料";

pub fn insufficient_stock(available: i64) -> String {
    format!("=> 錯誤：書籍庫存不足 (現有庫存: {})", available)
}

pub fn sale_not_found(sid: i64) -> String {
    format!("=> 錯誤：找不到銷售編號 {}", sid)
}

// =============================================================================
// Results
// =============================================================================

pub fn sale_recorded(total: i64) -> String {
    format!("=> 銷售記錄已新增！(銷售總額: {})", total)
}

pub fn sale_updated(sid: i64, total: i64) -> String {
    format!("=> 銷售編號 {} 已更新！(銷售總額: {})", sid, total)
}

pub fn sale_deleted(sid: i64) -> String {
    format!("=> 銷售編號 {} 已刪除", sid)
}
