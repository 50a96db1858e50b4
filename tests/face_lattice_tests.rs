use face_lattice::algs::f_vector::f_vector;
use face_lattice::algs::face_iter::Duality;
use face_lattice::algs::face_lattice::FaceLattice;
use face_lattice::face_error::FaceError;
use face_lattice::topology::generators;

mod util;
use util::*;

#[test]
fn lattice_holds_the_iterated_faces() {
    for (name, inc, f) in zoo() {
        for dual in [false, true] {
            let lat = FaceLattice::build(&inc, dual).unwrap();
            assert_eq!(lat.f_vector().as_slice(), f.as_slice(), "{name}");

            let duality = if dual { Duality::Dual } else { Duality::Primal };
            let mut streamed = faces_of(&inc, duality);
            streamed.sort_unstable();
            let mut stored = Vec::new();
            for k in -1..inc.dimension() {
                for face in lat.faces(k).unwrap() {
                    stored.push((face.dimension(), face.atom_indices().to_vec()));
                }
            }
            stored.sort_unstable();
            assert_eq!(stored, streamed, "{name} dual={dual}");
        }
    }
}

#[test]
fn index_lookup_round_trips() {
    let c = generators::cyclic(4, 8).unwrap();
    let lat = FaceLattice::build(&c, false).unwrap();
    for k in -1..4 {
        for i in 0..lat.n_faces(k).unwrap() {
            let face = lat.face_by_index(k, i).unwrap();
            assert_eq!(lat.find_face(k, face.atom_indices()).unwrap(), Some(i));
        }
    }
}

#[test]
fn lattice_ids_are_a_permutation() {
    let c = generators::cube(3).unwrap();
    for dual in [false, true] {
        let lat = FaceLattice::build(&c, dual).unwrap();
        let mut ids: Vec<usize> = (-1..3)
            .flat_map(|k| lat.faces(k).unwrap().map(|f| f.id()).collect::<Vec<_>>())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..27).collect::<Vec<_>>());
    }
}

#[test]
fn hasse_diagram_matches_face_sizes() {
    // every k-face of a simple or simplicial polytope has fixed cover counts
    let t = generators::simplex(4).unwrap();
    let lat = FaceLattice::build(&t, false).unwrap();
    for k in -1..3 {
        let pairs = lat.incidences(k).unwrap();
        // a (k+1)-face of a simplex has k+2 facets
        let expected = lat.n_faces(k + 1).unwrap() * (k + 2) as usize;
        assert_eq!(pairs.len(), expected, "k={k}");
    }

    let c = generators::cube(3).unwrap();
    let lat = FaceLattice::build(&c, true).unwrap();
    let f = f_vector(&c, Duality::Primal);
    // vertices on edges counts each edge twice
    assert_eq!(lat.incidences(0).unwrap().len(), 2 * f.get(1).unwrap());
    // edges on squares counts each square four times
    assert_eq!(lat.incidences(1).unwrap().len(), 4 * f.get(2).unwrap());
    let total: usize = (-1..2).map(|k| lat.incidences(k).unwrap().len()).sum();
    assert_eq!(lat.hasse_edges().len(), total);
}

#[test]
fn out_of_range_queries() {
    let sq = generators::cube(2).unwrap();
    let lat = FaceLattice::build(&sq, true).unwrap();
    assert!(matches!(
        lat.face_by_index(-2, 0),
        Err(FaceError::DimensionOutOfRange { dimension: -2, .. })
    ));
    assert!(matches!(
        lat.face_by_index(1, 4),
        Err(FaceError::IndexOutOfRange { index: 4, len: 4, .. })
    ));
    assert!(lat.faces(2).is_err());
    assert!(lat.n_faces(-1).is_ok());
}
