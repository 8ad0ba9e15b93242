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

use log::debug;
use serde::Serialize;

use crate::error::OperationError;
use crate::status::Status;
use crate::transcoding::{decode_common_flags, encode_common_flags, DataType};

pub fn encode<T: Serialize>(value: T) -> Result<(Vec<u8>, u32), OperationError> {
    let content = serde_json::to_vec(&value).map_err(|e| {
        debug!("json encode failed: {}", e);
        OperationError::from(Status::EncodingError)
    })?;
    let flags = encode_common_flags(DataType::Json);

    Ok((content, flags))
}

pub fn decode<T: serde::de::DeserializeOwned>(
    value: &[u8],
    flags: u32,
) -> Result<T, OperationError> {
    let datatype = decode_common_flags(flags);
    if datatype != DataType::Json {
        return Err(OperationError::from(Status::EncodingError));
    }

    serde_json::from_slice(value).map_err(|e| {
        debug!("json decode failed: {}", e);
        OperationError::from(Status::EncodingError)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn json_round_trip() {
        let (content, flags) = encode(vec![1u32, 2, 3]).expect("encode failed");
        let decoded: Vec<u32> = decode(&content, flags).expect("decode failed");
        assert_eq!(decoded, vec![1, 2, 3]);
    }

    #[test]
    fn decode_rejects_non_json_flags() {
        let flags = encode_common_flags(DataType::Binary);
        let err = decode::<Vec<u32>>(b"[1]", flags).expect_err("binary flags must not decode");
        assert_eq!(err.kind(), ErrorKind::EncodingFailure);
    }

    #[test]
    fn decode_rejects_malformed_payload() {
        let flags = encode_common_flags(DataType::Json);
        let err = decode::<Vec<u32>>(b"{not json", flags).expect_err("malformed payload");
        assert_eq!(err.kind(), ErrorKind::EncodingFailure);
    }
}
