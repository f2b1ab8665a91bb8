//! SQL keywords written by clause renderers.

pub const ADD_COLUMN: &str = "ADD COLUMN";
pub const ADD_TABLE: &str = "ADD TABLE";
pub const ALL: &str = "ALL";
pub const ALL_IN_TABLESPACE: &str = "ALL IN TABLESPACE";
pub const ALTER_COLUMN: &str = "ALTER COLUMN";
pub const AS: &str = "AS";
pub const BEGIN: &str = "BEGIN";
pub const CACHE: &str = "CACHE";
pub const CASCADE: &str = "CASCADE";
pub const COLLATE: &str = "COLLATE";
pub const CURRENT_ROLE: &str = "CURRENT_ROLE";
pub const CURRENT_USER: &str = "CURRENT_USER";
pub const CYCLE: &str = "CYCLE";
pub const DEPENDS_ON_EXTENSION: &str = "DEPENDS ON EXTENSION";
pub const DROP_COLUMN: &str = "DROP COLUMN";
pub const DROP_DEFAULT: &str = "DROP DEFAULT";
pub const DROP_NOT_NULL: &str = "DROP NOT NULL";
pub const DROP_TABLE: &str = "DROP TABLE";
pub const IF_EXISTS: &str = "IF EXISTS";
pub const INCREMENT_BY: &str = "INCREMENT BY";
pub const MAXVALUE: &str = "MAXVALUE";
pub const MINVALUE: &str = "MINVALUE";
pub const NO: &str = "NO";
pub const NOWAIT: &str = "NOWAIT";
pub const ON: &str = "ON";
pub const ONLY: &str = "ONLY";
pub const OWNED_BY: &str = "OWNED BY";
pub const OWNER_TO: &str = "OWNER TO";
pub const PUBLIC: &str = "PUBLIC";
pub const RENAME_COLUMN: &str = "RENAME COLUMN";
pub const RENAME_TO: &str = "RENAME TO";
pub const RESET: &str = "RESET";
pub const RESTART: &str = "RESTART";
pub const RESTRICT: &str = "RESTRICT";
pub const SESSION_USER: &str = "SESSION_USER";
pub const SET: &str = "SET";
pub const SET_DATA_TYPE: &str = "SET DATA TYPE";
pub const SET_DEFAULT: &str = "SET DEFAULT";
pub const SET_NOT_NULL: &str = "SET NOT NULL";
pub const SET_SCHEMA: &str = "SET SCHEMA";
pub const SET_STATISTICS: &str = "SET STATISTICS";
pub const SET_STORAGE: &str = "SET STORAGE";
pub const SET_TABLE: &str = "SET TABLE";
pub const SET_TABLESPACE: &str = "SET TABLESPACE";
pub const START_WITH: &str = "START WITH";
pub const TO: &str = "TO";
pub const TRANSACTION: &str = "TRANSACTION";
pub const USING: &str = "USING";
pub const WILDCARD: &str = "*";
pub const WITH: &str = "WITH";
pub const WITH_CHECK: &str = "WITH CHECK";
pub const WORK: &str = "WORK";
