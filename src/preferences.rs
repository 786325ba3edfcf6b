//! 偏好存储模块
//!
//! 提供一个持久化的键值槽，保存用户选择的目标语言。
//! 键固定为 `preferred-language`，值为语言代码字符串；
//! 语言选择时写入，程序启动时读取。

use std::path::Path;

use redb::{Database, TableDefinition, TableError};
use thiserror::Error;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// 语言偏好的存储键
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

/// 偏好存储错误
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("无法打开偏好数据库: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("事务失败: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("表操作失败: {0}")]
    Table(#[from] redb::TableError),

    #[error("存储操作失败: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("提交失败: {0}")]
    Commit(#[from] redb::CommitError),
}

/// 偏好存储
///
/// 基于 `redb` 的单文件键值存储；同一路径上的多次打开
/// 读到的是同一份持久数据。
pub struct Preferences {
    db: Database,
}

impl Preferences {
    /// 打开（必要时创建）指定路径上的偏好存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PreferenceError> {
        let db = Database::create(path)?;
        Ok(Preferences { db })
    }

    /// 读取已保存的语言偏好
    ///
    /// 从未保存过时返回 `None`。
    pub fn preferred_language(&self) -> Result<Option<String>, PreferenceError> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(PREFERENCES_TABLE) {
            Ok(table) => table,
            // 首次打开时表还不存在，等价于没有保存过偏好
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let value = table.get(PREFERRED_LANGUAGE_KEY)?;
        Ok(value.map(|v| v.value().to_string()))
    }

    /// 保存语言偏好
    pub fn set_preferred_language(&self, language: &str) -> Result<(), PreferenceError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(PREFERRED_LANGUAGE_KEY, language)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
