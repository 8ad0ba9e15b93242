/*
 *
 *  * Copyright (c) 2025 Couchbase, Inc.
 *  *
 *  * Licensed under the Apache License, Version 2.0 (the "License");
 *  * you may not use this file except in compliance with the License.
 *  * You may obtain a copy of the License at
 *  *
 *  *    http://www.apache.org/licenses/LICENSE-2.0
 *  *
 *  * Unless required by applicable law or agreed to in writing, software
 *  * distributed under the License is distributed on an "AS IS" BASIS,
 *  * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  * See the License for the specific language governing permissions and
 *  * limitations under the License.
 *
 */

//! The conventional common-flags encoding carried in a document's flags
//! field. The document core never interprets flags itself; these helpers are
//! for calling layers that want typed content out of a result.

pub mod json;

#[derive(Debug, PartialEq, Clone, Hash, Ord, PartialOrd, Eq)]
#[non_exhaustive]
pub enum DataType {
    Unknown,
    Json,
    Binary,
    String,
}

const CF_MASK: u32 = 0xFF000000;
const CF_FMT_MASK: u32 = 0x0F000000;

const CF_FMT_JSON: u32 = 2 << 24;
const CF_FMT_BINARY: u32 = 3 << 24;
const CF_FMT_STRING: u32 = 4 << 24;

const LF_JSON: u32 = 0;

pub fn encode_common_flags(value_type: DataType) -> u32 {
    let mut flags: u32 = 0;

    match value_type {
        DataType::Json => flags |= CF_FMT_JSON,
        DataType::Binary => flags |= CF_FMT_BINARY,
        DataType::String => flags |= CF_FMT_STRING,
        DataType::Unknown => {}
    }

    flags
}

pub fn decode_common_flags(flags: u32) -> DataType {
    // Check for legacy flags
    let flags = if flags & CF_MASK == 0 {
        if flags == LF_JSON {
            CF_FMT_JSON
        } else {
            return DataType::Unknown;
        }
    } else {
        flags
    };

    if flags & CF_FMT_MASK == CF_FMT_BINARY {
        DataType::Binary
    } else if flags & CF_FMT_MASK == CF_FMT_STRING {
        DataType::String
    } else if flags & CF_FMT_MASK == CF_FMT_JSON {
        DataType::Json
    } else {
        DataType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_flags_round_trip() {
        for datatype in [DataType::Json, DataType::Binary, DataType::String] {
            let flags = encode_common_flags(datatype.clone());
            assert_eq!(decode_common_flags(flags), datatype);
        }
    }

    #[test]
    fn legacy_zero_flags_decode_as_json() {
        assert_eq!(decode_common_flags(0), DataType::Json);
    }

    #[test]
    fn unassigned_format_decodes_as_unknown() {
        assert_eq!(decode_common_flags(9 << 24), DataType::Unknown);
        assert_eq!(decode_common_flags(7), DataType::Unknown);
    }
}
