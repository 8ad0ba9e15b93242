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

/// Durability token returned by mutating operations when the server supports
/// it: the vbucket the mutation landed on, the vbucket epoch uuid, and the
/// sequence number assigned to the mutation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MutationToken {
    vbid: u16,
    vbuuid: u64,
    seqno: u64,
}

impl MutationToken {
    pub fn new(vbid: u16, vbuuid: u64, seqno: u64) -> Self {
        Self {
            vbid,
            vbuuid,
            seqno,
        }
    }

    pub fn vbid(&self) -> u16 {
        self.vbid
    }

    pub fn vbuuid(&self) -> u64 {
        self.vbuuid
    }

    pub fn seqno(&self) -> u64 {
        self.seqno
    }
}
