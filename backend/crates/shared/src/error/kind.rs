//! Error Kind - Classification of errors
//!
//! [`ErrorKind`] は呼び出し層が返す HTTP ステータスの分類です。
//! セッション/クーポンのコア自体はエラーを返さず `None` を返すため、
//! ここに並ぶのは「不在」を HTTP に写像するのに必要な種別だけです。

use serde::Serialize;

/// エラー種別
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
/// assert_eq!(ErrorKind::NotFound.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - 入力値が不正（範囲外の割引率など）
    BadRequest,
    /// 401 - セッションが見つからない / 認証情報が誤り
    Unauthorized,
    /// 404 - 対象が存在しない（無効なクーポンを含む）
    NotFound,
    /// 422 - 形式は正しいが処理できない
    UnprocessableEntity,
    /// 500 - サーバー内部エラー
    InternalServerError,
}

impl ErrorKind {
    /// HTTP ステータスコード
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// 標準の理由フレーズ
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
