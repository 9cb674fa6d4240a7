// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

#![allow(missing_docs)]

use criterion::criterion_main;


use inner_product::inner_product;
use range_proof::range_proofs;

criterion_main!(inner_product, range_proofs);
